pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = "Shareable CSS declaration packages for your stylesheets";
pub const REPOSITORY_URL: &str = "https://github.com/penguinui/penguinui";
pub const BIN_NAME: &str = "penguinui";

/// Directory (relative to the project root) holding installed package descriptors.
pub const PACKAGES_DIR: &str = "penguinui";
pub const PACKAGE_EXTENSION: &str = "json";
pub const STYLESHEET_EXTENSION: &str = "css";
pub const DEFAULT_GENERATE_OUT: &str = "multiout";

/// Prefix of every comment the transform inserts into a stylesheet.
pub const COMMENT_PREFIX: &str = "penguinui:";

pub const PACKAGE_DIRECTIVE: &str = "package";
pub const USE_DIRECTIVE: &str = "use";
pub const ALIAS_KEYWORD: &str = "as";

pub const COMMANDS: &[(&str, &str, &[&str])] = &[
    (
        "build",
        "Expands @package/@use directives in a stylesheet",
        &["b"],
    ),
    ("add", "Downloads a package descriptor from a URL", &["i"]),
    ("list", "Lists installed packages", &["ls"]),
    ("remove", "Removes an installed package", &["rm"]),
    (
        "generate",
        "Generates package descriptors from CSS class rules",
        &["gen"],
    ),
    (
        "help",
        "Shows help information for penguinui or a specific command",
        &[],
    ),
];
pub const EXAMPLES: &[(&str, &str)] = &[
    ("penguinui build app.css", "Print the expanded stylesheet"),
    ("penguinui build app.css --out dist.css", "Write it to a file"),
    (
        "penguinui add https://example.com/button.json",
        "Install a package",
    ),
    ("penguinui list", "List installed packages"),
    ("penguinui remove button", "Remove a package"),
    ("penguinui generate styles/ --out penguinui", "Generate packages"),
];

pub const USER_AGENT: &str = concat!("penguinui/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
pub const CONNECT_TIMEOUT_SECS: u64 = 10;
