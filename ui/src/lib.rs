//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
    pub mod brands {
        pub use dioxus_free_icons::icons::fa_brands_icons::*;
    }
}

pub mod search;
pub use search::{Action, ResultsDropdown, SearchBox, Ticket, TypeAhead};

mod session;
pub use session::{
    complete_login, sign_out, token_store, use_session, SessionProvider, SessionState,
    SignOutButton,
};

mod theme;
pub use theme::{apply_theme, load_theme_from_storage, ThemeSignal};

mod header;
pub use header::{Header, SearchPalette};

mod footer;
pub use footer::Footer;

mod hero;
pub use hero::Hero;

mod categories;
pub use categories::Categories;

mod how_it_works;
pub use how_it_works::HowItWorks;

mod testimonials;
pub use testimonials::Testimonials;

mod join_provider;
pub use join_provider::JoinProviderSection;

mod common;
pub use common::{Loader, Logo, SectionTitle};

pub const MAIN_CSS: Asset = asset!("/assets/styling/main.css");
