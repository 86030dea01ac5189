use cqsh::Launcher;
use std::env::{args_os, var_os};

pub fn main() {
    let target = var_os("RELAUNCH_TARGET").unwrap();
    eprintln!("pid={}", std::process::id());

    let err = Launcher::new().target(target).launch(args_os());
    eprintln!("Failed with error - {}", err);
    std::process::exit(err.exit_code());
}
