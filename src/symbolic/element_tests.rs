//___________________________________TESTS____________________________________

#[cfg(test)]
mod tests {
    use crate::symbolic::element::{Element, ElementError, Evaluate, IntElement, Operator, Valuation};
    use strum::IntoEnumIterator;

    #[test]
    fn test_int_element_construction() {
        let e1 = IntElement::default();
        assert_eq!(e1.get_val(), 0);
        let e2 = IntElement::new(15);
        assert_eq!(e2.get_val(), 15);
        let mut e3 = e1;
        e3.set_val(21);
        assert_eq!(e3.get_val(), 21);
        assert_eq!(e1.get_val(), 0);
    }

    #[test]
    fn test_int_element_compound_operators() {
        let mut e1 = IntElement::new(21);
        let e2 = IntElement::new(15);
        e1 += e2;
        assert_eq!(e1.get_val(), 36);
        e1 -= e2;
        assert_eq!(e1.get_val(), 21);
        e1 *= e2;
        assert_eq!(e1.get_val(), 315);
        let e3 = e1 + e2;
        assert_eq!(e3.get_val(), 330);
        let e4 = e3 - e1;
        assert_eq!(e4.get_val(), 15);
        assert_eq!(e2, e4);
        assert_ne!(e3, e4);
        let e5 = e3 * e4;
        assert_eq!(e5.get_val(), 4950);
        assert_eq!(e5.to_string(), "4950");
        assert_eq!(e5.evaluate(&Valuation::new()), Ok(4950));
    }

    #[test]
    fn test_int_element_negative_display() {
        assert_eq!(IntElement::new(-42).to_string(), "-42");
        assert_eq!(Element::Const(-7).to_string(), "-7");
    }

    #[test]
    fn test_int_element_wraps_on_overflow() {
        let mut e = IntElement::new(i64::MAX);
        e += IntElement::new(1);
        assert_eq!(e.get_val(), i64::MIN);
    }

    #[test]
    fn test_variable_element() {
        let v1 = Element::Var('y');
        assert_eq!(v1.to_string(), "y");
        let v2 = Element::Var('x');
        let mut valuation = Valuation::new();
        valuation.insert('x', 10);
        valuation.insert('y', 4);
        assert_eq!(v1.eval(&valuation), Ok(4));
        assert_eq!(v2.eval(&valuation), Ok(10));
        assert_eq!(Element::Var('x'), v2);
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_unbound_variable() {
        let v = Element::Var('q');
        assert_eq!(v.eval(&Valuation::new()), Err(ElementError::UnboundVariable('q')));
    }

    #[test]
    fn test_composite_construction() {
        let e1 = Element::Const(20);
        let e2 = Element::Var('x');
        let elem = Element::composite(&e1, &e2, '+').unwrap();
        assert_eq!(elem.to_string(), "(20+x)");
        let copy_elem = elem.clone();
        assert_eq!(copy_elem.to_string(), "(20+x)");
        assert!(elem.is_composite());
        assert!(!e1.is_composite());
    }

    #[test]
    fn test_composite_rejects_unknown_symbol() {
        let e1 = Element::Const(20);
        let e2 = Element::Var('x');
        assert_eq!(
            Element::composite(&e1, &e2, 'a'),
            Err(ElementError::InvalidOperatorSymbol('a'))
        );
        assert_eq!(
            Element::composite(&e1, &e2, '/'),
            Err(ElementError::InvalidOperatorSymbol('/'))
        );
    }

    #[test]
    fn test_composite_evaluation() {
        let e1 = Element::Const(20);
        let e2 = Element::Var('x');
        let mut valuation = Valuation::new();
        valuation.insert('x', 15);
        let sum = Element::composite(&e1, &e2, '+').unwrap();
        let difference = Element::composite(&e1, &e2, '-').unwrap();
        let product = Element::composite(&e1, &e2, '*').unwrap();
        assert_eq!(difference.to_string(), "(20-x)");
        assert_eq!(sum.eval(&valuation), Ok(35));
        assert_eq!(difference.eval(&valuation), Ok(5));
        assert_eq!(product.eval(&valuation), Ok(300));
    }

    #[test]
    fn test_nested_composite() {
        // ((x*2)-(y+1))
        let left = Element::Var('x') * Element::Const(2);
        let right = Element::Var('y') + Element::Const(1);
        let expr = Element::combine(&left, &right, Operator::Sub);
        assert_eq!(expr.to_string(), "((x*2)-(y+1))");
        let mut valuation = Valuation::new();
        valuation.insert('x', 6);
        valuation.insert('y', 3);
        assert_eq!(expr.eval(&valuation), Ok(8));
    }

    #[test]
    fn test_composite_propagates_first_unbound_variable() {
        let expr = Element::Var('a') + Element::Var('b');
        let mut valuation = Valuation::new();
        assert_eq!(expr.eval(&valuation), Err(ElementError::UnboundVariable('a')));
        valuation.insert('a', 1);
        assert_eq!(expr.eval(&valuation), Err(ElementError::UnboundVariable('b')));
    }

    #[test]
    fn test_composite_owns_copies() {
        let mut left = Element::Var('x');
        let expr = Element::combine(&left, &Element::Const(1), Operator::Add);
        left = Element::Var('z');
        assert_eq!(left.to_string(), "z");
        assert_eq!(expr.to_string(), "(x+1)");
    }

    #[test]
    fn test_equality_is_textual() {
        let e1 = Element::Const(10);
        let e2 = Element::Var('x');
        let e3 = Element::combine(&e1, &e2, Operator::Add);
        assert_ne!(e1, e2);
        assert_ne!(e1, e3);
        assert_ne!(e2, e3);
        let ab = Element::Var('a') + Element::Var('b');
        let ba = Element::Var('b') + Element::Var('a');
        assert_ne!(ab, ba);
        assert_eq!(ab, Element::Var('a') + Element::Var('b'));
    }

    #[test]
    fn test_operator_symbols() {
        let symbols: Vec<String> = Operator::iter().map(|op| op.to_string()).collect();
        assert_eq!(symbols, vec!["+", "-", "*"]);
        for op in Operator::iter() {
            assert_eq!(Operator::try_from(op.symbol()), Ok(op));
        }
        assert_eq!(Operator::Mul.apply(-3, 4), -12);
        assert_eq!(Operator::Sub.apply(3, 4), -1);
    }
}
