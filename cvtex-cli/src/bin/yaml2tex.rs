// Convert YAML CV data back to LaTeX. Usage and exit codes are documented in src/lib.rs.

use cvtex_cli::{main_for, Direction};

fn main() {
    main_for(Direction::YamlToTex);
}
