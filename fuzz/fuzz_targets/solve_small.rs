use honggfuzz::fuzz;
use lacuna::{solve, Params};

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if data.len() < 6 {
                return;
            }
            // keep n small so a fuzz iteration stays cheap
            let n = (data[0] as u64 % 64) + 1;
            let k = (data[1] as u64 % n) + 1;
            let params = Params {
                n,
                k,
                a: data[2] as u64,
                b: data[3] as u64,
                c: data[4] as u64,
                r: data[5] as u64 + 1,
            };
            solve(&params).expect("in-range parameters must solve");
        });
    }
}
