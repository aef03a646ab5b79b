//! Core batch instructions
//! Each instruction checks roles and the lock before touching state

pub mod add_component;
pub mod adjust_supply;
pub mod burn;
pub mod initialize;
pub mod invoke;
pub mod lock;
pub mod mint;
pub mod refresh_values;
pub mod remove_component;
pub mod set_manager;
pub mod set_oracles;
pub mod set_owner;
pub mod swap_asset;
pub mod transfer;
pub mod value_feed;
pub mod view;

#[allow(ambiguous_glob_reexports)]
pub use add_component::*;
#[allow(ambiguous_glob_reexports)]
pub use adjust_supply::*;
#[allow(ambiguous_glob_reexports)]
pub use burn::*;
#[allow(ambiguous_glob_reexports)]
pub use initialize::*;
#[allow(ambiguous_glob_reexports)]
pub use invoke::*;
#[allow(ambiguous_glob_reexports)]
pub use lock::*;
#[allow(ambiguous_glob_reexports)]
pub use mint::*;
#[allow(ambiguous_glob_reexports)]
pub use refresh_values::*;
#[allow(ambiguous_glob_reexports)]
pub use remove_component::*;
#[allow(ambiguous_glob_reexports)]
pub use set_manager::*;
#[allow(ambiguous_glob_reexports)]
pub use set_oracles::*;
#[allow(ambiguous_glob_reexports)]
pub use set_owner::*;
#[allow(ambiguous_glob_reexports)]
pub use swap_asset::*;
#[allow(ambiguous_glob_reexports)]
pub use transfer::*;
#[allow(ambiguous_glob_reexports)]
pub use value_feed::*;
#[allow(ambiguous_glob_reexports)]
pub use view::*;
