use rand::Rng;
use rand::rngs::StdRng;
use crate::dominance::{compare, Dominance};
use crate::operators::Selection;
use crate::solution::Solution;

/// Two distinct random contestants, the dominating one wins. Incomparable
/// pairs are settled by a coin flip.
#[derive(Debug, Clone, Default)]
pub struct BinaryTournament;

impl BinaryTournament
{
    pub fn new() -> Self
    {
        BinaryTournament
    }
}

impl Selection for BinaryTournament
{
    fn select(&self, rng: &mut StdRng, solutions: &[Solution]) -> Solution
    {
        assert!(!solutions.is_empty(), "selection from an empty set");

        if solutions.len() == 1
        {
            return solutions[0].clone();
        }

        let i = rng.gen_range(0..solutions.len());
        let mut j = rng.gen_range(0..solutions.len() - 1);
        if j >= i
        {
            j += 1;
        }

        let (p1, p2) = (&solutions[i], &solutions[j]);

        let winner = match compare(p1, p2)
        {
            Dominance::Dominates => p1,
            Dominance::IsDominated => p2,
            Dominance::Incomparable => if rng.gen_bool(0.5) { p1 } else { p2 },
        };

        winner.clone()
    }
}
