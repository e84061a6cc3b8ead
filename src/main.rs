use psu_rs::ExitCode;

fn main() {
    let code = match psu_rs::adapters::run() {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("error: {}", e);
            e.exit_code()
        }
    };
    std::process::exit(code as i32);
}
