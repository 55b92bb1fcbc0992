use derive_more::{Display, From};

/// Something that can introduce itself.
pub trait SelfIdentifier {
    fn identify_self(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq, From)]
pub struct Human {
    pub name: String,
}

impl SelfIdentifier for Human {
    fn identify_self(&self) -> String {
        format!("Hello, I am {}.", self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, From)]
pub struct Robot {
    pub serial_number: u32,
}

impl Robot {
    /// The robot's identifier, built from a fixed prefix and its serial number.
    pub fn identifier(&self) -> Identifier {
        Identifier(self.serial_number)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("0X010-{_0}")]
pub struct Identifier(u32);

impl SelfIdentifier for Robot {
    fn identify_self(&self) -> String {
        format!("Beep Boop. I am {}.", self.identifier())
    }
}

/// Asks each entity to identify itself, in order.
pub fn introduce_all(entities: &[Box<dyn SelfIdentifier>]) -> Vec<String> {
    entities.iter().map(|entity| entity.identify_self()).collect()
}
