use folio_protocol::{ElementId, UiCommand};

const ANIMATE_CLASS: &str = "animate";

pub fn animate(id: &ElementId) -> UiCommand {
    UiCommand::add_class(id, ANIMATE_CLASS)
}
