/*!
Weights of clauses, by size.

Heuristics treat a short clause as more constraining than a long clause, and the coefficients express how much more.
The table is built once, from the longest clause of a formula, and is read-only thereafter.

| size | coefficient |
|---|---|
| 0 | 0 |
| 1, 2 | 1 |
| 3 | the ternary baseline (configurable) |
| 4 | 0.05 |
| 5 | 0.01 |
| 6 | 0.003 |
| *k* ≥ 7 | 20.4514 · 0.218673^*k* |

```rust
# use lookahead_sat::structures::coefficients::Coefficients;
let coefficients = Coefficients::new(8, 0.2);

assert_eq!(coefficients.get(2), 1.0);
assert_eq!(coefficients.get(3), 0.2);
assert!(coefficients.get(7) < coefficients.get(6));
```
*/

/// The type of a clause coefficient.
pub type Coefficient = f64;

/// The coefficient of each clause size up to the longest clause of a formula.
#[derive(Clone, Debug, PartialEq)]
pub struct Coefficients {
    table: Vec<Coefficient>,
    ternary: Coefficient,
}

/// Base of the exponential decay for clauses of size seven or more.
const DECAY_SCALE: Coefficient = 20.4514;

/// Rate of the exponential decay for clauses of size seven or more.
const DECAY_RATE: Coefficient = 0.218673;

impl Coefficients {
    /// A table with entries for every size up to and including `max_size`.
    pub fn new(max_size: usize, ternary: Coefficient) -> Self {
        let table = (0..=max_size.max(6))
            .map(|size| Self::rule(size, ternary))
            .collect();
        Coefficients { table, ternary }
    }

    fn rule(size: usize, ternary: Coefficient) -> Coefficient {
        match size {
            0 => 0.0,
            1 | 2 => 1.0,
            3 => ternary,
            4 => 0.05,
            5 => 0.01,
            6 => 0.003,
            _ => DECAY_SCALE * DECAY_RATE.powi(size as i32),
        }
    }

    /// The coefficient of a clause of the given size.
    ///
    /// Sizes beyond the table are computed directly.
    pub fn get(&self, size: usize) -> Coefficient {
        match self.table.get(size) {
            Some(coefficient) => *coefficient,
            None => Self::rule(size, self.ternary),
        }
    }

    /// The largest size with an entry in the table.
    pub fn max_size(&self) -> usize {
        self.table.len() - 1
    }
}
