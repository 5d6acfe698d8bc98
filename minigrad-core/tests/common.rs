use minigrad_core::Scalar;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Added allow(dead_code) because usage across different test crates isn't detected easily.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// One computed node of a randomly generated graph: an opcode and indices of
/// earlier nodes (inputs come first, then previously computed nodes).
#[derive(Debug, Clone, Copy)]
pub struct Step {
    pub opcode: u8,
    pub lhs: usize,
    pub rhs: usize,
}

/// Generates a random recipe of `steps` nodes over `inputs` leaves.
#[allow(dead_code)]
pub fn random_recipe(seed: u64, inputs: usize, steps: usize) -> Vec<Step> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..steps)
        .map(|k| {
            let available = inputs + k;
            Step {
                opcode: rng.gen_range(0..5),
                lhs: rng.gen_range(0..available),
                rhs: rng.gen_range(0..available),
            }
        })
        .collect()
}

/// Replays `recipe` on `inputs` and returns every node, inputs first.
#[allow(dead_code)]
pub fn build_graph(recipe: &[Step], inputs: &[Scalar]) -> Vec<Scalar> {
    let mut nodes: Vec<Scalar> = inputs.to_vec();
    for step in recipe {
        let a = nodes[step.lhs].clone();
        let b = nodes[step.rhs].clone();
        let node = match step.opcode {
            0 => &a + &b,
            // Products of sigmoids stay in (0, 1).
            1 => &a.sigmoid() * &b.sigmoid(),
            2 => a.sigmoid(),
            3 => -&a,
            _ => &a * 0.5,
        };
        nodes.push(node);
    }
    nodes
}
