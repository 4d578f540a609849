mod button;
mod external_link;
mod footer;
mod icon;
mod nav_bar;
mod reveal;
mod section;

pub use button::{BUTTON_BASE_CLASS, Button, button_class};
pub use external_link::ExternalLink;
pub use footer::{Footer, footer_text};
pub use icon::{Icon, IconKind};
pub use nav_bar::NavBar;
pub use reveal::{Motion, Reveal};
pub use section::Section;
