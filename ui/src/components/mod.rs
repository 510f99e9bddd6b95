//! Shared components: the explorer header, the navigation bar and the
//! primitives it is assembled from.

pub mod app_navbar;
mod button;
mod dropdown;
mod icons;
pub mod main_nav;

pub use app_navbar::AppNavbar;
pub use button::{Button, ButtonVariant};
pub use dropdown::{
    DropdownMenu, DropdownMenuContent, DropdownMenuGroup, DropdownMenuItem, DropdownMenuTrigger,
};
pub use icons::ChevronDownIcon;
pub use main_nav::{use_current_path, MainNav, NavItem};
