//! routes subcommand
//!
//! Prints the registered endpoint descriptors without touching the network.

/// Execute the routes command
pub fn execute() {
    println!("METHOD\tROUTE");
    for desc in crate::routes::all() {
        println!("{}\t{}", desc.method, desc.route);
    }
}
