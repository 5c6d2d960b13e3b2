//!
//! bionic -- two-line brand lockups on demand
//!

             extern crate antidote;
#[macro_use] extern crate enum_derive;
             extern crate glob;
             extern crate image;
#[macro_use] extern crate log;
             extern crate lru_cache;
#[macro_use] extern crate macro_attr;
             extern crate mime;
             extern crate rusttype;
             extern crate serde;
#[macro_use] extern crate serde_derive;
             extern crate time;


#[cfg(test)]              extern crate serde_json;
#[cfg(test)] #[macro_use] extern crate spectral;


mod model;
mod render;
mod resources;
mod style;
mod util;


pub use model::*;
pub use render::*;
pub use resources::*;
pub use style::*;
pub use util::cache::*;
