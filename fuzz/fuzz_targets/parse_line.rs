use honggfuzz::fuzz;
use lacuna::Params;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if let Ok(text) = std::str::from_utf8(data) {
                let _ = Params::parse(text.trim());
            }
        });
    }
}
