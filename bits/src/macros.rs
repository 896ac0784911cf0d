/// Implements the bitwise operators for a `#[repr(transparent)]` newtype over an integer, both
/// between two newtypes and between the newtype and its raw integer.
macro_rules! impl_bit_ops {
    ($t:ty, $raw:ty) => {
        impl BitAnd for $t {
            type Output = Self;

            #[inline(always)]
            fn bitand(self, other: Self) -> Self {
                Self(self.0 & other.0)
            }
        }

        impl BitAnd<$raw> for $t {
            type Output = Self;

            #[inline(always)]
            fn bitand(self, other: $raw) -> Self {
                Self(self.0 & other)
            }
        }

        impl BitOr for $t {
            type Output = Self;

            #[inline(always)]
            fn bitor(self, other: Self) -> Self {
                Self(self.0 | other.0)
            }
        }

        impl BitOr<$raw> for $t {
            type Output = Self;

            #[inline(always)]
            fn bitor(self, other: $raw) -> Self {
                Self(self.0 | other)
            }
        }

        impl BitXor for $t {
            type Output = Self;

            #[inline(always)]
            fn bitxor(self, other: Self) -> Self {
                Self(self.0 ^ other.0)
            }
        }

        impl BitXor<$raw> for $t {
            type Output = Self;

            #[inline(always)]
            fn bitxor(self, other: $raw) -> Self {
                Self(self.0 ^ other)
            }
        }

        impl Not for $t {
            type Output = Self;

            #[inline(always)]
            fn not(self) -> Self {
                Self(!self.0)
            }
        }

        impl BitAndAssign for $t {
            #[inline(always)]
            fn bitand_assign(&mut self, other: Self) {
                self.0 &= other.0;
            }
        }

        impl BitOrAssign for $t {
            #[inline(always)]
            fn bitor_assign(&mut self, other: Self) {
                self.0 |= other.0;
            }
        }

        impl BitXorAssign for $t {
            #[inline(always)]
            fn bitxor_assign(&mut self, other: Self) {
                self.0 ^= other.0;
            }
        }
    };
}
