use enum_enhancer::{NoConstantFound, enum_enhancer};

#[enum_enhancer]
mod names {
    #[enum_enhancer]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Crate {
        Core,
        Alloc,
    }

    impl Crate {
        pub fn new(depth: u8) -> Self {
            match depth {
                0 => Crate::Core,
                _ => Crate::Alloc,
            }
        }

        #[allow(non_snake_case)]
        pub fn getDepth(&self) -> u8 {
            *self as u8
        }
    }

    #[enum_enhancer]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Super {
        Parent,
    }

    #[enum_enhancer]
    #[allow(non_camel_case_types)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Field {
        values,
        other,
    }

    impl Field {
        pub fn at(index: usize) -> Self {
            match index {
                0 => Field::values,
                _ => Field::other,
            }
        }

        #[allow(non_snake_case)]
        pub fn getIndex(&self) -> usize {
            *self as usize
        }
    }
}

use names::{Crate, Crate_, Field, Field_, Super, Super_};

#[test]
fn type_named_like_a_path_keyword() {
    assert_eq!(Crate_::fromDepth(1), Ok(Crate::Alloc));
    assert_eq!(Crate_::fromDepth(2), Err(NoConstantFound));
    assert_eq!(Crate_::associate(Crate::getDepth)[&Crate::Core], 0);
    assert_eq!(Super_::enumList(), [Super::Parent]);
    assert_eq!(Super_::Parent, "Parent");
}

#[test]
fn variant_named_values() {
    assert_eq!(Field_::values, "values");
    assert_eq!(Field_::other, "other");
    assert_eq!(Field_::enumList(), [Field::values, Field::other]);
    assert_eq!(Field_::fromIndex(1), Ok(Field::other));
    assert_eq!(Field::at(0), Field::values);
    assert_eq!(Field_::associate(|field| field.getIndex()).len(), 2);
}
