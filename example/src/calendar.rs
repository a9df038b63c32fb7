use enum_enhancer::companion;

#[companion]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const fn from_number(number: u8) -> Self {
        match number {
            1 => Weekday::Monday,
            2 => Weekday::Tuesday,
            3 => Weekday::Wednesday,
            4 => Weekday::Thursday,
            5 => Weekday::Friday,
            6 => Weekday::Saturday,
            _ => Weekday::Sunday,
        }
    }

    pub fn weekend(short_name: &'static str) -> Weekday {
        match short_name {
            "sat" => Weekday::Saturday,
            _ => Weekday::Sunday,
        }
    }

    #[allow(non_snake_case)]
    pub fn getNumber(&self) -> u8 {
        *self as u8 + 1
    }

    #[allow(non_snake_case)]
    pub fn getShort_name(&self) -> &'static str {
        match self {
            Weekday::Monday => "mon",
            Weekday::Tuesday => "tue",
            Weekday::Wednesday => "wed",
            Weekday::Thursday => "thu",
            Weekday::Friday => "fri",
            Weekday::Saturday => "sat",
            Weekday::Sunday => "sun",
        }
    }
}

include!(concat!(env!("OUT_DIR"), "/crate.calendar.Weekday_.rs"));

pub mod shifts;
