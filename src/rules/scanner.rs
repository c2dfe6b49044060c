//! Board scanning for rule-forming token sequences.
//!
//! Every row is scanned left-to-right and every column top-to-bottom. At
//! each start cell the longest valid sequence
//!
//! ```text
//! sequence    := subjects IS [NOT] complements
//! subjects    := NOUN (AND NOUN)*
//! complements := complement (AND complement)*
//! complement  := PROPERTY | NOUN
//! ```
//!
//! is matched with zero gap tolerance: a cell without a text instance breaks
//! the sequence at that point. Each subject paired with each complement
//! yields one rule; the optional NOT flips the polarity of every pairing.
//!
//! Scanning is a pure function of the grid. Both scan directions contribute
//! to one set; duplicates collapse by rule identity, so re-scanning an
//! unchanged board always yields the same set.

use smallvec::SmallVec;

use super::rule::{Complement, Rule};
use super::ruleset::RuleSet;
use crate::core::Position;
use crate::grid::Grid;
use crate::objects::{ObjectRegistry, Token, TypeKey};

/// Derive the active rule set from the current board.
#[must_use]
pub fn scan_rules(grid: &Grid, registry: &ObjectRegistry) -> RuleSet {
    let mut rules = RuleSet::new();
    let width = grid.width() as i32;
    let height = grid.height() as i32;

    let mut line: Vec<Option<Token>> = Vec::with_capacity(width.max(height) as usize);

    // Row scans first: their discoveries win transformation tie-breaks.
    for row in 0..height {
        line.clear();
        line.extend((0..width).map(|col| token_at(grid, registry, Position::new(row, col))));
        scan_line(&line, &mut rules);
    }

    for col in 0..width {
        line.clear();
        line.extend((0..height).map(|row| token_at(grid, registry, Position::new(row, col))));
        scan_line(&line, &mut rules);
    }

    rules
}

/// The token contributed by a cell, if any.
///
/// When several text instances stack, the lowest instance id wins - a
/// deterministic choice that is stable across identical boards.
fn token_at(grid: &Grid, registry: &ObjectRegistry, position: Position) -> Option<Token> {
    grid.objects_at(position)
        .filter(|instance| registry.is_text(instance.type_key))
        .min_by_key(|instance| instance.id)
        .and_then(|instance| registry.token(instance.type_key))
}

/// Match sequences starting at every offset of one scan line.
fn scan_line(line: &[Option<Token>], rules: &mut RuleSet) {
    for start in 0..line.len() {
        match_sequence(&line[start..], rules);
    }
}

/// Match the longest valid sequence at the head of `line`, if any.
fn match_sequence(line: &[Option<Token>], rules: &mut RuleSet) {
    let mut cursor = 0usize;

    let token = |index: usize| -> Option<Token> { line.get(index).copied().flatten() };

    // Subject list. A malformed list (AND not followed by a noun) forms no
    // rule at all; the inner sequences are rediscovered at later offsets.
    let mut subjects: SmallVec<[TypeKey; 2]> = SmallVec::new();
    match token(cursor) {
        Some(Token::Noun(subject)) => subjects.push(subject),
        _ => return,
    }
    cursor += 1;
    while token(cursor) == Some(Token::And) {
        match token(cursor + 1) {
            Some(Token::Noun(subject)) => {
                subjects.push(subject);
                cursor += 2;
            }
            _ => return,
        }
    }

    if token(cursor) != Some(Token::Is) {
        return;
    }
    cursor += 1;

    let negated = token(cursor) == Some(Token::Not);
    if negated {
        cursor += 1;
    }

    // Complement list. A trailing AND with nothing valid after it simply
    // ends the match; what was already consumed still forms rules.
    let mut complements: SmallVec<[Complement; 2]> = SmallVec::new();
    match complement_token(token(cursor)) {
        Some(complement) => complements.push(complement),
        None => return,
    }
    cursor += 1;
    while token(cursor) == Some(Token::And) {
        match complement_token(token(cursor + 1)) {
            Some(complement) => {
                complements.push(complement);
                cursor += 2;
            }
            None => break,
        }
    }

    for subject in &subjects {
        for complement in &complements {
            rules.insert(Rule {
                subject: *subject,
                complement: *complement,
                negated,
            });
        }
    }
}

fn complement_token(token: Option<Token>) -> Option<Complement> {
    match token? {
        Token::Property(property) => Some(Complement::Property(property)),
        Token::Noun(target) => Some(Complement::Noun(target)),
        Token::Is | Token::And | Token::Not => None,
    }
}
