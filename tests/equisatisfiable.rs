use std::collections::HashMap;

use otter_tseytin::{
    config::Config,
    context::Context,
    db::symbol::{ConstraintSource, SymbolType},
    structures::{
        atom::Atom,
        clause::Clause,
        expression::Expression,
        valuation::CValuation,
    },
};

use rand::{rngs::SmallRng, Rng, SeedableRng};

const SYMBOLS: [&str; 4] = ["A", "B", "C", "D"];

/// The greatest count of atoms on which every valuation is checked.
const ATOM_BOUND: usize = 14;

/// A random expression over the atoms `1` to `max_atom`, of at most the given depth.
fn random_expression(rng: &mut SmallRng, depth: usize, max_atom: Atom) -> Expression {
    if depth == 0 || rng.random_bool(0.25) {
        let atom = Expression::Atom(rng.random_range(1..=max_atom));
        return match rng.random_bool(0.3) {
            true => !atom,
            false => atom,
        };
    }

    match rng.random_range(0..3) {
        0 => random_expression(rng, depth - 1, max_atom) & random_expression(rng, depth - 1, max_atom),
        1 => random_expression(rng, depth - 1, max_atom) | random_expression(rng, depth - 1, max_atom),
        _ => !random_expression(rng, depth - 1, max_atom),
    }
}

/// A valuation of atoms `1` to `atom_count` from the bits of `bits`.
fn valuation_from_bits(bits: usize, atom_count: usize) -> CValuation {
    let mut valuation = vec![None];
    for index in 0..atom_count {
        valuation.push(Some(bits & (1 << index) != 0));
    }
    valuation
}

/// Checks that:
/// - Each valuation of the non-auxiliary atoms satisfying the constraints extends to exactly one valuation satisfying the clauses.
/// - No other valuation of the non-auxiliary atoms extends to a valuation satisfying the clauses.
///
/// Returns false if the context has too many atoms to check, and true otherwise.
fn check_equisatisfiable(the_context: &Context, constraints: &[Expression]) -> bool {
    let atom_count = the_context.atom_db.count();
    if atom_count > ATOM_BOUND {
        return false;
    }

    let base_count = atom_count - the_context.atom_db.auxiliary_atoms().count();
    assert!(the_context
        .atom_db
        .auxiliary_atoms()
        .all(|atom| atom as usize > base_count));

    let base_mask = (1 << base_count) - 1;
    let mut extensions: HashMap<usize, usize> = HashMap::default();

    for bits in 0..(1_usize << atom_count) {
        let valuation = valuation_from_bits(bits, atom_count);
        if the_context
            .clause_db
            .all_clauses()
            .all(|clause| clause.satisfied_on(&valuation))
        {
            *extensions.entry(bits & base_mask).or_default() += 1;
        }
    }

    let falsum = the_context.symbol_db.falsum() as usize;
    let truth = the_context.symbol_db.truth() as usize;

    for bits in 0..(1_usize << base_count) {
        let valuation = valuation_from_bits(bits, base_count);

        let constants_hold = valuation[falsum] == Some(false) && valuation[truth] == Some(true);
        let constraints_hold = constraints
            .iter()
            .all(|constraint| constraint.evaluate(&valuation) == Some(true));

        let expected = match constants_hold && constraints_hold {
            true => 1,
            false => 0,
        };

        assert_eq!(
            extensions.get(&bits).copied().unwrap_or_default(),
            expected,
            "{:?} on {:?}",
            constraints.iter().map(|c| c.to_string()).collect::<Vec<_>>(),
            valuation
        );
    }

    true
}

fn random_context(rng: &mut SmallRng, config: Config) -> (Context, Vec<Expression>) {
    let mut the_context = Context::from_config(config).unwrap();
    for symbol in SYMBOLS {
        let _ = the_context.add_symbol(symbol, SymbolType::Boolean);
    }
    let max_atom = the_context.atom_db.count() as Atom;

    let mut constraints = Vec::default();
    for _ in 0..rng.random_range(1..=3) {
        let symbol = SYMBOLS[rng.random_range(0..SYMBOLS.len())];
        let expression = random_expression(rng, 3, max_atom);

        assert!(the_context.add_constraint(symbol, expression.clone()).is_ok());
        constraints.push(expression);
    }

    (the_context, constraints)
}

mod random {
    use super::*;

    fn check_with(seed: u64, config: Config) {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut rng = SmallRng::seed_from_u64(seed);
        let mut checked = 0;

        while checked < 32 {
            let (mut the_context, constraints) = random_context(&mut rng, config.clone());

            assert!(the_context.encode_all().is_ok());

            if check_equisatisfiable(&the_context, &constraints) {
                checked += 1;
            }
        }
    }

    #[test]
    fn default_config() {
        check_with(71, Config::default());
    }

    #[test]
    fn without_cnf_shortcut() {
        let mut config = Config::default();
        config.cnf_shortcut.value = false;
        check_with(72, config);
    }

    #[test]
    fn without_direct_root() {
        let mut config = Config::default();
        config.direct_root.value = false;
        check_with(73, config);
    }

    #[test]
    fn without_either() {
        let mut config = Config::default();
        config.cnf_shortcut.value = false;
        config.direct_root.value = false;
        check_with(74, config);
    }
}

mod fixed {
    use super::*;

    #[test]
    fn unsatisfiable() {
        let mut the_context = Context::from_config(Config::default()).unwrap();
        let _ = the_context.add_symbol("A", SymbolType::Boolean);

        let constraints = vec![
            the_context.expression_from_string("A & !A").unwrap(),
        ];
        for constraint in &constraints {
            assert!(the_context.add_constraint("A", constraint.clone()).is_ok());
        }

        assert!(the_context.encode_all().is_ok());
        assert!(check_equisatisfiable(&the_context, &constraints));
    }

    #[test]
    fn constants() {
        let mut the_context = Context::from_config(Config::default()).unwrap();
        let _ = the_context.add_symbol("A", SymbolType::Boolean);

        let constraint = the_context
            .expression_from_string("!(false | !A) | (true & false)")
            .unwrap();
        assert!(the_context.add_constraint("A", constraint.clone()).is_ok());

        assert!(the_context.encode_all().is_ok());
        assert!(check_equisatisfiable(&the_context, &[constraint]));
    }
}
