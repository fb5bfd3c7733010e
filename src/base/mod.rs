pub mod aggregate;
pub mod categories;
pub mod category;
mod cents;
pub mod charset;
mod config;
pub mod date;
mod datepart;
pub mod fs;
mod kind;
pub mod legend;
pub mod listing;
pub mod palette;
pub mod record;
pub mod recordlist;
pub mod summary;
pub mod util;
pub mod wedge;
pub mod window;

pub use aggregate::Aggregate;
pub use categories::Categories;
pub use category::Category;
pub use cents::Cents;
pub use charset::Charset;
pub use config::Config;
pub use date::Date;
pub use datepart::Datepart;
pub use fs::Fs;
pub use kind::Kind;
pub use palette::Color;
pub use palette::Palette;
pub use record::Record;
pub use recordlist::Recordlist;
pub use wedge::FullCircle;
pub use wedge::Pie;
pub use wedge::Wedge;
pub use window::Window;
