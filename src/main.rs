use secure_bucket::{args, run_app};

fn main() {
    // Parse command-line arguments
    let args = args::args_checks();

    // Run the interactive bucket and upload workflow
    if let Err(e) = run_app(&args) {
        eprintln!("Application error: {e}");
        std::process::exit(1);
    }
}
