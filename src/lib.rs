//! # Bootstrap 5 widgets
//!
//! Fluent, immutable builders that render Bootstrap 5 components as
//! plain HTML strings. No stylesheet or script handling, just markup.
//!
//! ## Features
//! - Six widgets: [`Alert`], [`Button`], [`Dropdown`], [`Menu`], [`Nav`] and [`NavBar`]
//! - Copy-on-write setters: every call returns a new widget, so partial
//!   configurations can be shared and reused safely
//! - Item definitions built fluently or loaded from YAML
//! - Deterministic attribute ordering and entity-preserving escaping
//!
//! ## Example
//! ```
//! use bs5_widgets::{Menu, MenuItem};
//!
//! let menu = Menu::new()
//!     .class("navbar-nav")
//!     .current_path("/home")
//!     .items_container_class("nav-item")
//!     .link_class("nav-link")
//!     .items(vec![
//!         MenuItem::new().label("Home").link("/home").into(),
//!         MenuItem::new().label("Contact").link("/contact").into(),
//!     ]);
//!
//! let html = menu.render()?;
//! assert!(html.contains("<a class=\"nav-link active\" href=\"/home\" aria-current=\"page\">Home</a>"));
//! # Ok::<(), bs5_widgets::WidgetError>(())
//! ```

pub mod alert;
pub mod attribute;
pub mod button;
pub mod dropdown;
pub mod encode;
pub mod error;
pub mod item;
pub mod menu;
pub mod nav;
pub mod navbar;
pub mod normalize;
pub mod tag;
pub mod template;

// --- Widgets ---
pub use alert::Alert;
pub use button::Button;
pub use dropdown::Dropdown;
pub use menu::Menu;
pub use nav::Nav;
pub use navbar::NavBar;

// --- Supporting types ---
pub use attribute::{AttrValue, Attributes};
pub use error::{WidgetError, WidgetResult};
pub use item::{parse_items, Item, MenuItem};
