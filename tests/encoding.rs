use otter_tseytin::{
    config::Config,
    context::{Context, Counters},
    db::{
        atom::{AtomAllocator, AtomDB},
        clause::ClauseDB,
        symbol::{ConstraintSource, SymbolType},
    },
    procedures::encode::encode_all,
    structures::{
        atom::{Atom, AtomKind},
        clause::ClauseSource,
        expression::Expression,
    },
    types::err::{AtomDBError, EncodingError, ErrorKind},
};

/// A context with the boolean symbols `A` and `B`, as atoms `3` and `4`.
fn context_with_a_b(config: Config) -> Context {
    let mut the_context = Context::from_config(config).unwrap();
    let _ = the_context.add_symbol("A", SymbolType::Boolean);
    let _ = the_context.add_symbol("B", SymbolType::Boolean);
    the_context
}

fn clauses_of(the_context: &Context) -> Vec<Vec<i32>> {
    the_context.clause_db.all_clauses().cloned().collect()
}

/// A fixed list of constraints, with the constants as atoms `1` and `2`.
struct FixedSource {
    constraints: Vec<(String, Vec<Expression>)>,
}

impl ConstraintSource for FixedSource {
    fn truth(&self) -> Atom {
        2
    }

    fn falsum(&self) -> Atom {
        1
    }

    fn constraints(&self) -> impl Iterator<Item = (&str, &[Expression])> {
        self.constraints
            .iter()
            .map(|(name, expressions)| (name.as_str(), expressions.as_slice()))
    }
}

/// Allocates auxiliary atoms from a counter, and nothing else.
struct Counter {
    next: Atom,
}

impl AtomAllocator for Counter {
    fn fresh_auxiliary(&mut self) -> Result<Atom, AtomDBError> {
        let atom = self.next;
        self.next += 1;
        Ok(atom)
    }

    fn atom_count(&self) -> usize {
        (self.next - 1) as usize
    }
}

mod driver {
    use super::*;

    #[test]
    fn symbol_then_constraint_order() {
        let mut the_context = context_with_a_b(Config::default());

        let _ = the_context.add_constraint_from_string("B", "A & B");
        let _ = the_context.add_constraint_from_string("A", "!A");
        let _ = the_context.add_constraint_from_string("A", "A | B");

        assert!(the_context.encode_all().is_ok());

        assert_eq!(
            clauses_of(&the_context),
            vec![
                vec![-1],
                vec![2],
                vec![-3],
                vec![3, 4],
                vec![3],
                vec![4]
            ]
        );
    }

    #[test]
    fn unknown_type_skipped() {
        let mut the_context = context_with_a_b(Config::default());
        let _ = the_context.add_symbol("M", SymbolType::Unknown);

        let _ = the_context.add_constraint_from_string("M", "A & (B | !A)");
        let _ = the_context.add_constraint_from_string("A", "A");

        assert!(the_context.encode_all().is_ok());

        assert_eq!(clauses_of(&the_context), vec![vec![-1], vec![2], vec![3]]);
        assert_eq!(the_context.counters.constraints, 1);
        assert_eq!(the_context.atom_db.auxiliary_atoms().count(), 0);
    }

    #[test]
    fn custom_source_and_allocator() {
        let a = Expression::Atom(3);
        let b = Expression::Atom(4);

        let source = FixedSource {
            constraints: vec![
                ("first".to_string(), vec![!(a.clone() & b.clone())]),
                ("second".to_string(), vec![a | b]),
            ],
        };

        let mut allocator = Counter { next: 5 };
        let mut clauses: Vec<Vec<i32>> = Vec::default();
        let mut counters = Counters::default();

        let result = encode_all(
            &mut clauses,
            &mut allocator,
            &source,
            &Config::default(),
            &mut counters,
        );

        assert!(result.is_ok());
        assert_eq!(
            clauses,
            vec![
                vec![-1],
                vec![2],
                vec![-3, -4, 5],
                vec![3, -5],
                vec![4, -5],
                vec![-5],
                vec![3, 4],
            ]
        );

        assert_eq!(counters.root_negations, 1);
        assert_eq!(counters.auxiliary_atoms, 1);
    }

    #[test]
    fn dimacs() {
        let mut the_context = context_with_a_b(Config::default());
        let _ = the_context.add_constraint_from_string("A", "A | -B");
        let _ = the_context.add_constraint_from_string("B", "!(A & B)");

        assert!(the_context.encode_all().is_ok());

        assert_eq!(
            the_context.as_dimacs(),
            "p cnf 5 7\n-1 0\n2 0\n3 -4 0\n-3 -4 5 0\n3 -5 0\n4 -5 0\n-5 0\n"
        );
    }
}

mod configuration {
    use super::*;

    #[test]
    fn without_cnf_shortcut() {
        let mut config = Config::default();
        config.cnf_shortcut.value = false;

        let mut the_context = context_with_a_b(config);
        let _ = the_context.add_constraint_from_string("A", "A | !B");

        assert!(the_context.encode_all().is_ok());

        assert_eq!(clauses_of(&the_context), vec![vec![-1], vec![2], vec![3, -4]]);
        assert_eq!(the_context.clause_db.count_from(ClauseSource::Root), 1);
        assert_eq!(the_context.clause_db.count_from(ClauseSource::Direct), 0);
    }

    #[test]
    fn with_cnf_shortcut() {
        let mut the_context = context_with_a_b(Config::default());
        let _ = the_context.add_constraint_from_string("A", "A | !B");

        assert!(the_context.encode_all().is_ok());

        assert_eq!(the_context.clause_db.count_from(ClauseSource::Direct), 1);
        assert_eq!(the_context.counters.direct_clauses, 1);
    }

    #[test]
    fn without_direct_root() {
        let mut config = Config::default();
        config.direct_root.value = false;

        let mut the_context = context_with_a_b(config);
        let _ = the_context.add_constraint_from_string("A", "A & B");

        assert!(the_context.encode_all().is_ok());

        assert_eq!(
            clauses_of(&the_context),
            vec![
                vec![-1],
                vec![2],
                vec![-3, -4, 5],
                vec![3, -5],
                vec![4, -5],
                vec![5]
            ]
        );
        assert!(the_context.atom_db.is_auxiliary(5));
    }

    #[test]
    fn without_either() {
        let mut config = Config::default();
        config.cnf_shortcut.value = false;
        config.direct_root.value = false;

        let mut the_context = context_with_a_b(config);
        let _ = the_context.add_constraint_from_string("A", "A | !B");

        assert!(the_context.encode_all().is_ok());

        assert_eq!(
            clauses_of(&the_context),
            vec![
                vec![-1],
                vec![2],
                vec![3, -4, -5],
                vec![-3, 5],
                vec![4, 5],
                vec![5]
            ]
        );
    }
}

mod failure {
    use super::*;

    use otter_tseytin::structures::atom::ATOM_MAX;

    #[test]
    fn atom_without_literal() {
        let mut atom_db = AtomDB::default();
        for _ in 0..4 {
            let _ = atom_db.fresh_atom(AtomKind::Symbol);
        }

        let source = FixedSource {
            constraints: vec![(
                "first".to_string(),
                vec![
                    Expression::Atom(3) | Expression::Atom(4),
                    Expression::Atom(ATOM_MAX + 1) | Expression::Atom(3),
                    !Expression::Atom(ATOM_MAX + 1) & Expression::Atom(3),
                ],
            )],
        };

        let mut clause_db = ClauseDB::default();
        let mut counters = Counters::default();

        let result = encode_all(
            &mut clause_db,
            &mut atom_db,
            &source,
            &Config::default(),
            &mut counters,
        );

        assert_eq!(
            result,
            Err(ErrorKind::Encoding(EncodingError::InvalidAtom(ATOM_MAX + 1)))
        );
        assert_eq!(
            clause_db.all_clauses().cloned().collect::<Vec<_>>(),
            vec![vec![-1], vec![2], vec![3, 4]]
        );
        assert_eq!(atom_db.count(), 4);
    }

    #[test]
    fn nested_equivalence() {
        let mut the_context = context_with_a_b(Config::default());

        let _ = the_context.add_constraint_from_string("A", "A & B");
        let _ = the_context.add_constraint_from_string("B", "!(A | (B = A))");
        let _ = the_context.add_constraint_from_string("B", "B");

        let atoms_before = the_context.atom_db.count();

        assert_eq!(
            the_context.encode_all(),
            Err(ErrorKind::Encoding(EncodingError::UnsupportedFormula))
        );

        assert_eq!(clauses_of(&the_context), vec![vec![-1], vec![2], vec![3], vec![4]]);
        assert_eq!(the_context.atom_db.count(), atoms_before);
        assert_eq!(the_context.counters.constraints, 1);
    }

    #[test]
    fn atoms_exhausted() {
        let mut atom_db = AtomDB::with_limit(4);
        let source = FixedSource {
            constraints: vec![
                ("first".to_string(), vec![Expression::Atom(3)]),
                (
                    "second".to_string(),
                    vec![(Expression::Atom(3) & Expression::Atom(4)) | Expression::Atom(3)],
                ),
            ],
        };

        for _ in 0..4 {
            let _ = atom_db.fresh_atom(AtomKind::Symbol);
        }

        let mut clause_db = ClauseDB::default();
        let mut counters = Counters::default();

        let result = encode_all(
            &mut clause_db,
            &mut atom_db,
            &source,
            &Config::default(),
            &mut counters,
        );

        assert_eq!(result, Err(ErrorKind::AtomDB(AtomDBError::AtomsExhausted)));
        assert_eq!(clause_db.total_clause_count(), 3);
    }
}

mod counting {
    use super::*;

    #[test]
    fn counters_agree_with_database() {
        let mut the_context = context_with_a_b(Config::default());

        for constraint in ["A | !B", "!(A | B)", "(A & B) | (!A & !B)", "A"] {
            let _ = the_context.add_constraint_from_string("A", constraint);
        }

        assert!(the_context.encode_all().is_ok());

        let counters = &the_context.counters;
        let clause_db = &the_context.clause_db;

        assert_eq!(counters.constraints, 4);
        assert_eq!(counters.root_negations, 1);
        assert_eq!(counters.auxiliary_atoms, 3);
        assert_eq!(counters.constant_clauses, 2);

        assert_eq!(counters.direct_clauses, clause_db.count_from(ClauseSource::Direct));
        assert_eq!(counters.tseytin_clauses, clause_db.count_from(ClauseSource::Tseytin));
        assert_eq!(counters.root_clauses, clause_db.count_from(ClauseSource::Root));
        assert_eq!(counters.total_clauses(), clause_db.total_clause_count());
    }
}

mod strings {
    use super::*;

    use otter_tseytin::types::err::{ParseError, SymbolDBError};

    #[test]
    fn fresh_names_become_symbols() {
        let mut the_context = context_with_a_b(Config::default());

        let expression = the_context.expression_from_string("A & (Z || false)").unwrap();

        assert_eq!(expression.to_string(), "(3 & (5 | 1))");
        assert_eq!(the_context.symbol_db.symbol("Z").map(|s| s.atom), Some(5));
        assert_eq!(the_context.atom_db.name_of(5), Some("Z"));
    }

    #[test]
    fn symbol_errors() {
        let mut the_context = context_with_a_b(Config::default());

        assert_eq!(
            the_context.add_symbol("A", SymbolType::Tristate),
            Err(ErrorKind::SymbolDB(SymbolDBError::DuplicateSymbol("A".to_string())))
        );
        assert_eq!(
            the_context.add_constraint_from_string("Q", "A"),
            Err(ErrorKind::SymbolDB(SymbolDBError::UnknownSymbol("Q".to_string())))
        );
    }

    #[test]
    fn malformed_constraint_not_added() {
        let mut the_context = context_with_a_b(Config::default());

        assert_eq!(
            the_context.add_constraint_from_string("A", "A & (B |"),
            Err(ErrorKind::Parse(ParseError::MissingNode(8)))
        );
        assert_eq!(the_context.symbol_db.constraint_count(), 0);

        assert_eq!(
            the_context.add_constraint_from_string("A", "X & Y & ("),
            Err(ErrorKind::Parse(ParseError::MissingNode(9)))
        );
        assert!(the_context.symbol_db.symbol("X").is_none());
        assert!(the_context.symbol_db.symbol("Y").is_none());
        assert_eq!(the_context.atom_db.count(), 4);

        assert!(the_context.add_symbol("C", SymbolType::Boolean).is_ok());
        assert_eq!(the_context.symbol_db.symbol("C").map(|s| s.atom), Some(5));
    }

    #[test]
    fn unknown_target_not_introduced() {
        let mut the_context = context_with_a_b(Config::default());

        assert_eq!(
            the_context.add_constraint_from_string("Q", "Q | A"),
            Err(ErrorKind::SymbolDB(SymbolDBError::UnknownSymbol("Q".to_string())))
        );
        assert!(the_context.symbol_db.symbol("Q").is_none());
        assert_eq!(the_context.atom_db.count(), 4);
    }

    #[test]
    fn fresh_names_in_order_of_appearance() {
        let mut the_context = context_with_a_b(Config::default());

        let expression = the_context.expression_from_string("X | !X & Y | A").unwrap();

        assert_eq!(expression.to_string(), "((5 | (!5 & 6)) | 3)");
        assert_eq!(the_context.atom_db.name_of(5), Some("X"));
        assert_eq!(the_context.atom_db.name_of(6), Some("Y"));
        assert_eq!(the_context.atom_db.count(), 6);
    }
}
