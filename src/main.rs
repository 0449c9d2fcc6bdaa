extern crate arpcap;
extern crate clap;
extern crate env_logger;

use std::backtrace::Backtrace;
use std::io;
use std::process;

use arpcap::core::capture::DEFAULT_CAPACITY;

/// Prints every ARP frame arriving on an interface, one line per frame.
fn main() {
    env_logger::init();

    let default_capacity = DEFAULT_CAPACITY.to_string();

    // clap prints usage and exits with status 1 on bad arguments.
    let matches = clap::App::new("arpcap")
        .about("Captures and decodes ARP traffic on a network interface")
        .arg(
            clap::Arg::with_name("INTERFACE")
                .help("Name of the interface to listen on, e.g. eth0")
                .required(true)
                .index(1),
        )
        .arg(
            clap::Arg::with_name("buffer-size")
                .long("buffer-size")
                .value_name("BYTES")
                .help("Number of bytes read per frame")
                .default_value(&default_capacity)
                .takes_value(true),
        )
        .get_matches();

    let ifr_name = matches.value_of("INTERFACE").unwrap_or_default();

    let capacity = match matches
        .value_of("buffer-size")
        .and_then(|size| size.parse::<usize>().ok())
    {
        Some(capacity) if capacity > 0 => capacity,
        _ => {
            eprintln!("Bad buffer size, expected a positive number of bytes.");
            eprintln!("{}", matches.usage());
            process::exit(1);
        }
    };

    process::exit(capture(ifr_name, capacity));
}

#[cfg(target_os = "linux")]
fn capture(ifr_name: &str, capacity: usize) -> i32 {
    let stdout = io::stdout();
    let stderr = io::stderr();

    let result = arpcap::linux::run(
        arpcap::linux::Libc,
        ifr_name,
        capacity,
        &mut stdout.lock(),
        &mut stderr.lock(),
    );

    match result {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("{}", Backtrace::force_capture());
            1
        }
    }
}

#[cfg(not(target_os = "linux"))]
fn capture(_: &str, _: usize) -> i32 {
    eprintln!("Sorry, capturing is only supported on Linux.");
    eprintln!("{}", Backtrace::force_capture());
    1
}
