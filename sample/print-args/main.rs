use std::env::args_os;

pub fn main() {
    println!("pid={}", std::process::id());
    for arg in args_os() {
        println!("{}", arg.to_string_lossy());
    }
}
