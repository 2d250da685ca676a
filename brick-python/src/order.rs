/// Binding strength of a generated Python expression. Lower binds tighter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Order(u8);

impl Order {
    pub const ATOMIC: Self = Self(0);
    pub const COLLECTION: Self = Self(1);
    pub const STRING_CONVERSION: Self = Self(1);
    pub const MEMBER: Self = Self(2);
    pub const FUNCTION_CALL: Self = Self(2);
    pub const EXPONENTIATION: Self = Self(3);
    pub const UNARY_SIGN: Self = Self(4);
    pub const BITWISE_NOT: Self = Self(4);
    pub const MULTIPLICATIVE: Self = Self(5);
    pub const ADDITIVE: Self = Self(6);
    pub const BITWISE_SHIFT: Self = Self(7);
    pub const BITWISE_AND: Self = Self(8);
    pub const BITWISE_XOR: Self = Self(9);
    pub const BITWISE_OR: Self = Self(10);
    pub const RELATIONAL: Self = Self(11);
    pub const LOGICAL_NOT: Self = Self(12);
    pub const LOGICAL_AND: Self = Self(13);
    pub const LOGICAL_OR: Self = Self(14);
    pub const CONDITIONAL: Self = Self(15);
    pub const LAMBDA: Self = Self(16);
    pub const NONE: Self = Self(99);

    /// Wraps `code` of this order in parentheses if it cannot be spliced into
    /// a context of `outer` order as is.
    pub fn parenthesize(self, code: String, outer: Self) -> String {
        if outer > self || (outer == self && (outer == Self::ATOMIC || outer == Self::NONE)) {
            code
        } else {
            format!("({})", code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keep_tighter_code() {
        assert_eq!(
            Order::FUNCTION_CALL.parenthesize("f(x)".into(), Order::NONE),
            "f(x)"
        );
        assert_eq!(
            Order::ATOMIC.parenthesize("x".into(), Order::UNARY_SIGN),
            "x"
        );
    }

    #[test]
    fn parenthesize_looser_code() {
        assert_eq!(
            Order::UNARY_SIGN.parenthesize("-1".into(), Order::EXPONENTIATION),
            "(-1)"
        );
    }

    #[test]
    fn parenthesize_code_of_same_order() {
        assert_eq!(
            Order::ADDITIVE.parenthesize("a + b".into(), Order::ADDITIVE),
            "(a + b)"
        );
    }

    #[test]
    fn keep_atomic_and_none_codes_of_same_order() {
        assert_eq!(Order::ATOMIC.parenthesize("x".into(), Order::ATOMIC), "x");
        assert_eq!(Order::NONE.parenthesize("x".into(), Order::NONE), "x");
    }
}
