//! Print every supported digest of a message passed on the command line.

use hashkit::HashAlgorithm;

fn main() {
    let message = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "The quick brown fox jumps over the lazy dog".to_string());

    println!("message: {message:?}");
    for algo in HashAlgorithm::ALL {
        println!("{:>6}  {}", algo.as_str(), algo.digest_str(&message));
    }
}
