use syn::{Attribute, Error};

pub const COMPONENT: &str = "component";

#[derive(Default)]
pub struct ConstructorAttributes {
    pub ignore: bool,
}

impl TryFrom<&Attribute> for ConstructorAttributes {
    type Error = Error;

    fn try_from(value: &Attribute) -> Result<Self, Self::Error> {
        let mut ignore = false;
        value.parse_nested_meta(|meta| {
            if meta.path.is_ident("ignore") {
                ignore = true;
                Ok(())
            } else {
                Err(meta.error("Unsupported component attribute!"))
            }
        })?;

        Ok(Self { ignore })
    }
}
