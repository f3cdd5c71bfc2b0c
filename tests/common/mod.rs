//! Shared helpers for the integration tests.

#![allow(dead_code)]

use bimatch::Edge;

pub type Graph = Vec<Edge<String, String>>;

/// Small deterministic xorshift generator so property tests stay reproducible.
pub struct XorShift(u64);

impl XorShift {
    pub fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    pub fn below(&mut self, bound: u64) -> u64 {
        self.next_u64() % bound
    }
}

/// Random graph with `lefts` x `rights` candidate pairs, each present with
/// probability roughly `density_percent / 100`. Every left id gets at least
/// one edge and weights are small integers so sums compare exactly.
pub fn random_graph(rng: &mut XorShift, lefts: usize, rights: usize, density_percent: u64) -> Graph {
    let mut edges = Vec::new();
    for l in 0..lefts {
        let mut has_edge = false;
        for r in 0..rights {
            if rng.below(100) < density_percent {
                edges.push(Edge::new(
                    format!("l{l}"),
                    format!("r{r}"),
                    rng.below(20) as f64,
                ));
                has_edge = true;
            }
        }
        if !has_edge {
            let r = rng.below(rights as u64);
            edges.push(Edge::new(format!("l{l}"), format!("r{r}"), rng.below(20) as f64));
        }
    }
    edges
}

pub fn scenario_a() -> Vec<Edge<&'static str, &'static str>> {
    vec![
        Edge::new("apple", "banana", 1.0),
        Edge::new("peanut", "banana", 2.0),
    ]
}

pub fn scenario_b() -> Vec<Edge<&'static str, &'static str>> {
    vec![
        Edge::new("a", "b", 1.0),
        Edge::new("c", "b", 2.0),
        Edge::new("y", "z", 10.0),
        Edge::new("y", "zz", 100.0),
    ]
}
