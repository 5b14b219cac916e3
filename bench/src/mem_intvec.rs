use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

use intvector::IntVector;

const SEED_VALS: u64 = 114514;
const LENS: [usize; 4] = [100, 1000, 10000, 100000];

fn main() {
    for len in LENS {
        show_memories(len);
    }
}

fn gen_random_ints(len: usize, seed: u64) -> Vec<i32> {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen()).collect()
}

fn show_memories(len: usize) {
    println!("[n_vals={len}]");
    let vals = gen_random_ints(len, SEED_VALS);

    let mut iv = IntVector::new(1).unwrap();
    for &x in &vals {
        iv.append(x).unwrap();
    }
    print_memory("append", &iv);

    let mut iv = IntVector::new(1).unwrap();
    iv.append_slice(&vals).unwrap();
    print_memory("append_slice", &iv);

    while iv.len() > len / 8 {
        iv.pop_back().unwrap();
    }
    print_memory("pop_back to 1/8", &iv);

    iv.shrink_to_fit().unwrap();
    print_memory("shrink_to_fit", &iv);
}

fn print_memory(name: &str, iv: &IntVector) {
    let bytes = iv.capacity() * std::mem::size_of::<i32>() + std::mem::size_of_val(iv);
    println!(
        "{}: capacity={}, {:.3} bits per value",
        name,
        iv.capacity(),
        (bytes * 8) as f64 / iv.len() as f64
    );
}
