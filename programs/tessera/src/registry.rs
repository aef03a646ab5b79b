//! Component registry operations
//! Pure functions over the component vector, duplicate-free at all times
//! Membership is set-like on the identifier; removal also checks the ticker

use anchor_lang::prelude::*;

use crate::{
  constants::{MAX_COMPONENTS, MAX_TICKER_LEN},
  error::TesseraError,
  state::AssetEntry,
};

/// Position of the identifier, if present
pub fn index_of(components: &[AssetEntry], identifier: &Pubkey) -> Option<usize> {
  components.iter().position(|c| c.identifier == *identifier)
}

pub fn contains_identifier(components: &[AssetEntry], identifier: &Pubkey) -> bool {
  index_of(components, identifier).is_some()
}

/// Append a component
/// Rejects overlong tickers, a full registry, and duplicate identifiers
pub fn add_component(
  components: &mut Vec<AssetEntry>,
  identifier: Pubkey,
  ticker: String,
) -> Result<()> {
  require!(ticker.len() <= MAX_TICKER_LEN, TesseraError::TickerTooLong);
  require!(components.len() < MAX_COMPONENTS, TesseraError::ComponentLimitExceeded);
  require!(
    !contains_identifier(components, &identifier),
    TesseraError::AlreadyPresent
  );

  components.push(AssetEntry { identifier, ticker });

  Ok(())
}

/// Remove the component matching the (identifier, ticker) pair exactly
/// Order of the remaining entries is preserved
pub fn remove_component(
  components: &mut Vec<AssetEntry>,
  identifier: &Pubkey,
  ticker: &str,
) -> Result<AssetEntry> {
  let idx = components
    .iter()
    .position(|c| c.identifier == *identifier && c.ticker == ticker)
    .ok_or(TesseraError::NotFound)?;

  Ok(components.remove(idx))
}

/// Replace one component with another in a single step
/// All checks run before any mutation, so a failed swap leaves the
/// registry untouched
pub fn swap_asset(
  components: &mut Vec<AssetEntry>,
  removed_identifier: &Pubkey,
  added_identifier: Pubkey,
  added_ticker: String,
) -> Result<AssetEntry> {
  require!(added_ticker.len() <= MAX_TICKER_LEN, TesseraError::TickerTooLong);

  let idx = index_of(components, removed_identifier).ok_or(TesseraError::NotFound)?;

  require!(
    !contains_identifier(components, &added_identifier),
    TesseraError::AlreadyPresent
  );

  let removed = components.remove(idx);
  components.push(AssetEntry {
    identifier: added_identifier,
    ticker: added_ticker,
  });

  Ok(removed)
}

/// O(n^2) duplicate scan over a caller-supplied component list
/// Used once at initialization; post-init mutations keep the registry
/// duplicate-free by construction
pub fn has_duplicate(components: &[AssetEntry]) -> bool {
  for i in 0..components.len() {
    for j in (i + 1)..components.len() {
      if components[i].identifier == components[j].identifier {
        return true;
      }
    }
  }
  false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: Pubkey, ticker: &str) -> AssetEntry {
        AssetEntry {
            identifier: id,
            ticker: ticker.to_string(),
        }
    }

    #[test]
    fn test_add_and_find() {
        let mut components = vec![];
        let id = Pubkey::new_unique();

        add_component(&mut components, id, "AAA".to_string()).unwrap();

        assert_eq!(index_of(&components, &id), Some(0));
        assert!(contains_identifier(&components, &id));
        assert!(!contains_identifier(&components, &Pubkey::new_unique()));
    }

    #[test]
    fn test_add_duplicate_identifier_fails() {
        let mut components = vec![];
        let id = Pubkey::new_unique();

        add_component(&mut components, id, "AAA".to_string()).unwrap();
        assert!(add_component(&mut components, id, "AAA".to_string()).is_err());
        // identifier is the set key, a fresh ticker does not help
        assert!(add_component(&mut components, id, "BBB".to_string()).is_err());
        assert_eq!(components.len(), 1);
    }

    #[test]
    fn test_add_overlong_ticker_fails() {
        let mut components = vec![];
        let result = add_component(
            &mut components,
            Pubkey::new_unique(),
            "ELEVENCHARS".to_string(),
        );
        assert!(result.is_err());
        assert!(components.is_empty());
    }

    #[test]
    fn test_add_beyond_limit_fails() {
        let mut components = vec![];
        for _ in 0..MAX_COMPONENTS {
            add_component(&mut components, Pubkey::new_unique(), "T".to_string()).unwrap();
        }
        let result = add_component(&mut components, Pubkey::new_unique(), "T".to_string());
        assert!(result.is_err());
        assert_eq!(components.len(), MAX_COMPONENTS);
    }

    #[test]
    fn test_remove_preserves_order() {
        let ids: Vec<Pubkey> = (0..3).map(|_| Pubkey::new_unique()).collect();
        let mut components = vec![
            entry(ids[0], "AAA"),
            entry(ids[1], "BBB"),
            entry(ids[2], "CCC"),
        ];

        let removed = remove_component(&mut components, &ids[1], "BBB").unwrap();
        assert_eq!(removed.ticker, "BBB");
        assert_eq!(components[0].identifier, ids[0]);
        assert_eq!(components[1].identifier, ids[2]);
    }

    #[test]
    fn test_remove_requires_exact_pair() {
        let id = Pubkey::new_unique();
        let mut components = vec![entry(id, "AAA")];

        // identifier present but ticker mismatched
        assert!(remove_component(&mut components, &id, "BBB").is_err());
        assert!(remove_component(&mut components, &Pubkey::new_unique(), "AAA").is_err());
        assert_eq!(components.len(), 1);
    }

    #[test]
    fn test_swap_replaces_in_one_step() {
        let old_id = Pubkey::new_unique();
        let new_id = Pubkey::new_unique();
        let mut components = vec![entry(old_id, "OLD")];

        let removed = swap_asset(&mut components, &old_id, new_id, "NEW".to_string()).unwrap();

        assert_eq!(removed.identifier, old_id);
        assert_eq!(components.len(), 1);
        assert_eq!(index_of(&components, &new_id), Some(0));
        assert!(!has_duplicate(&components));
    }

    #[test]
    fn test_failed_swap_leaves_registry_untouched() {
        let id_a = Pubkey::new_unique();
        let id_b = Pubkey::new_unique();
        let mut components = vec![entry(id_a, "AAA"), entry(id_b, "BBB")];
        let before = components.clone();

        // removed side missing
        assert!(swap_asset(
            &mut components,
            &Pubkey::new_unique(),
            Pubkey::new_unique(),
            "NEW".to_string()
        )
        .is_err());
        assert_eq!(components, before);

        // added side already present
        assert!(swap_asset(&mut components, &id_a, id_b, "BBB".to_string()).is_err());
        assert_eq!(components, before);

        // overlong added ticker
        assert!(swap_asset(
            &mut components,
            &id_a,
            Pubkey::new_unique(),
            "ELEVENCHARS".to_string()
        )
        .is_err());
        assert_eq!(components, before);
    }

    #[test]
    fn test_swap_full_registry_still_works() {
        // swap never changes the count, so a full registry accepts it
        let mut components = vec![];
        for _ in 0..MAX_COMPONENTS {
            add_component(&mut components, Pubkey::new_unique(), "T".to_string()).unwrap();
        }
        let victim = components[0].identifier;
        let new_id = Pubkey::new_unique();

        swap_asset(&mut components, &victim, new_id, "U".to_string()).unwrap();
        assert_eq!(components.len(), MAX_COMPONENTS);
        assert!(contains_identifier(&components, &new_id));
    }

    #[test]
    fn test_has_duplicate_scan() {
        let id = Pubkey::new_unique();
        assert!(!has_duplicate(&[]));
        assert!(!has_duplicate(&[entry(id, "AAA"), entry(Pubkey::new_unique(), "BBB")]));
        // identifier collision is a duplicate even under distinct tickers
        assert!(has_duplicate(&[
            entry(id, "AAA"),
            entry(Pubkey::new_unique(), "BBB"),
            entry(id, "CCC"),
        ]));
    }
}
