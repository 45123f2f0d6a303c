use colored::*;

use crate::terminal::print;

const BANNER: &str = r#"
        ╔═════════════════════════════════════════╗
        ║   _ __   ___| |_ _ __ ___   ___  _ __   ║
        ║  | '_ \ / _ \ __| '_ ` _ \ / _ \| '_ \  ║
        ║  | | | |  __/ |_| | | | | | (_) | | | | ║
        ║  |_| |_|\___|\__|_| |_| |_|\___/|_| |_| ║
        ║                                         ║
        ╚═════════════════════════════════════════╝
"#;

pub fn print() {
    print::print(&format!("{}", BANNER.green()));
}
