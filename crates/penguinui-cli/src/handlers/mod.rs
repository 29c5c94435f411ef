pub mod add;
pub mod build;
pub mod generate;
pub mod help;
pub mod list;
pub mod remove;

pub use add::AddHandler;
pub use build::BuildHandler;
pub use generate::GenerateHandler;
pub use help::HelpHandler;
pub use list::ListHandler;
pub use remove::RemoveHandler;
