use enum_enhancer::companion;

#[companion]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shift {
    Early,
    Late,
    Night,
}

include!(concat!(env!("OUT_DIR"), "/crate.calendar.shifts.Shift_.rs"));
