//! Bridge between boards and the fixed-length integer genomes a genetic
//! algorithm engine breeds. The engine itself stays external: this module
//! only supplies the representation, the fitness score, the goal predicate
//! and the legal gene alphabet.

use itertools::Itertools;
use rand::Rng;
use thiserror::Error;

use crate::board::{Board, BoardError, Loc};
use crate::problem::goal_reached;

/// A candidate solution: one gene per column, each gene the row of that
/// column's tower, every value in `[0, board size)`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Individual {
    genes: Vec<usize>,
}

impl Individual {
    pub fn new(genes: Vec<usize>) -> Individual {
        Individual { genes }
    }

    pub fn genes(&self) -> &[usize] {
        &self.genes
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodingError {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error("gene {index} is {value}, outside 0..{size}")]
    GeneOutOfRange {
        index: usize,
        value: usize,
        size: usize,
    },
    #[error("column {0} holds no tower")]
    EmptyColumn(usize),
}

/// The legal values for any single gene on a board of the given size.
pub fn alphabet(size: usize) -> Vec<usize> {
    (0..size).collect()
}

/// A uniformly random genome for a board of the given size. The caller owns
/// the generator, so seeding (and therefore determinism) stays outside the
/// core.
pub fn random_individual(size: usize, rng: &mut impl Rng) -> Individual {
    Individual::new((0..size).map(|_| rng.gen_range(0..size)).collect())
}

/// Places one tower per column at the row each gene names, on a board as
/// wide as the genome. The board's tower cap applies, so genomes longer
/// than the cap keep only their first four columns' towers.
pub fn decode(individual: &Individual) -> Result<Board, EncodingError> {
    let size = individual.len();
    let mut board = Board::new(size)?;
    for (column, &row) in individual.genes().iter().enumerate() {
        if row >= size {
            return Err(EncodingError::GeneOutOfRange {
                index: column,
                value: row,
                size,
            });
        }
        board.add_tower(Loc::new(column, row));
    }
    Ok(board)
}

/// The inverse of [`decode`] for boards holding one tower in every column.
pub fn encode(board: &Board) -> Result<Individual, EncodingError> {
    let genes = (0..board.size())
        .map(|x| {
            (0..board.size())
                .find(|&y| board.tower_at(Loc::new(x, y)))
                .ok_or(EncodingError::EmptyColumn(x))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Individual::new(genes))
}

/// Number of non-attacking tower pairs under row and diagonal rules, the
/// classic constraint score. Higher is better; an undecodable genome scores
/// zero.
pub fn fitness(individual: &Individual) -> f64 {
    let Ok(board) = decode(individual) else {
        return 0.0;
    };
    board
        .occupied_positions()
        .iter()
        .tuple_combinations()
        .filter(|(a, b)| non_attacking(**a, **b))
        .count() as f64
}

/// Decodes, then applies the center-layout goal test.
pub fn is_goal(individual: &Individual) -> bool {
    match (decode(individual), Board::goal(individual.len())) {
        (Ok(board), Ok(goal)) => goal_reached(&board, &goal),
        _ => false,
    }
}

fn non_attacking(a: Loc, b: Loc) -> bool {
    a.y != b.y && a.x.abs_diff(b.x) != a.y.abs_diff(b.y)
}
