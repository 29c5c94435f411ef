pub mod descriptor;
pub mod io;

pub use descriptor::{PackageDescriptor, is_valid_name, parse_lenient, validate};
pub use io::{descriptor_path, packages_dir, read_descriptor, write_descriptor};
