//! Terminal rendering and the interactive mapping session

use std::fmt::Write as _;
use std::io::{self, BufRead, Write};

use gala_core::{GuestId, RoomId};

use crate::viewmodel::{GuestListViewModel, GuestRow, PoolRow, RoomMappingViewModel};

const HELP: &str = "\
Commands:
  assign <guest> <room>   move a guest into a room
  unassign <guest>        move a guest back to the unassigned pool
  pick <guest>            start moving a guest
  drop [room]             put the picked guest in a room, or back in the pool
  cancel                  stop moving without changing anything
  auto                    place remaining guests first-fit
  reset                   empty every room
  show                    print the current mapping
  ok                      dismiss the last message
  help                    show this help
  quit                    leave the session";

/// One line typed in the mapping session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Assign(GuestId, RoomId),
    Unassign(GuestId),
    Pick(GuestId),
    Drop(Option<RoomId>),
    Cancel,
    Auto,
    Reset,
    Show,
    Dismiss,
    Help,
    Quit,
}

impl SessionCommand {
    /// Parse a line; `Ok(None)` for a blank line
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let command = match parts.as_slice() {
            [] => return Ok(None),
            ["assign", guest, room] => Self::Assign(GuestId::new(*guest), RoomId::new(*room)),
            ["unassign", guest] => Self::Unassign(GuestId::new(*guest)),
            ["pick", guest] => Self::Pick(GuestId::new(*guest)),
            ["drop"] => Self::Drop(None),
            ["drop", room] => Self::Drop(Some(RoomId::new(*room))),
            ["cancel"] => Self::Cancel,
            ["auto"] => Self::Auto,
            ["reset"] => Self::Reset,
            ["show"] => Self::Show,
            ["ok"] => Self::Dismiss,
            ["help"] => Self::Help,
            ["quit"] | ["exit"] => Self::Quit,
            ["assign", ..] => return Err("usage: assign <guest> <room>".to_string()),
            ["unassign", ..] => return Err("usage: unassign <guest>".to_string()),
            ["pick", ..] => return Err("usage: pick <guest>".to_string()),
            ["drop", ..] => return Err("usage: drop [room]".to_string()),
            [other, ..] => return Err(format!("unknown command '{}', try 'help'", other)),
        };
        Ok(Some(command))
    }
}

pub fn render_guest_list(rows: &[GuestRow]) -> String {
    if rows.is_empty() {
        return "No guests.\n".to_string();
    }

    let mut out = String::new();
    for row in rows {
        let (indent, marker) = if row.is_detail {
            ("    ", String::new())
        } else if row.family_size > 1 {
            let sign = if row.expanded { '-' } else { '+' };
            ("", format!(" [{}{}]", sign, row.family_size - 1))
        } else {
            ("", String::new())
        };

        let label = format!("{}{}{}", indent, row.name, marker);
        let line = format!(
            "{:<28} {:<6} {:>3}  {}  {}",
            label, row.category, row.age, row.contact, row.stay
        );
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out
}

/// Footer line with guest and family totals
pub fn render_guest_summary(vm: &GuestListViewModel) -> String {
    format!(
        "{} guests in {} families\n",
        vm.guest_count(),
        vm.groups().len()
    )
}

fn write_guest(out: &mut String, guest: &PoolRow) {
    let marker = if guest.is_moving { "*" } else { " " };
    let _ = writeln!(
        out,
        " {}{:<10} {} ({})",
        marker, guest.id, guest.name, guest.occupancy
    );
}

pub fn render_mapping(vm: &RoomMappingViewModel) -> String {
    let mut out = String::new();

    for room in vm.room_rows() {
        let _ = writeln!(
            out,
            "{} [{}] {}/{}",
            room.label, room.id, room.occupancy, room.capacity
        );
        for guest in &room.guests {
            write_guest(&mut out, guest);
        }
    }

    let pool = vm.pool_rows();
    let _ = writeln!(out, "Unassigned ({})", pool.len());
    for guest in &pool {
        write_guest(&mut out, guest);
    }

    if let Some(notice) = vm.notice() {
        let _ = writeln!(out, "! {}", notice);
    }
    out
}

/// Read commands until `quit` or end of input
pub fn run_session<R: BufRead, W: Write>(
    vm: &mut RoomMappingViewModel,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    write!(out, "{}", render_mapping(vm))?;
    writeln!(out, "Type 'help' for commands.")?;

    for line in input.lines() {
        let line = line?;
        let command = match SessionCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                writeln!(out, "{}", message)?;
                continue;
            }
        };

        match command {
            SessionCommand::Assign(guest, room) => {
                vm.move_to_room(&guest, &room);
                write!(out, "{}", render_mapping(vm))?;
            }
            SessionCommand::Unassign(guest) => {
                vm.move_to_pool(&guest);
                write!(out, "{}", render_mapping(vm))?;
            }
            SessionCommand::Pick(guest) => {
                vm.drag_start(&guest);
                write!(out, "{}", render_mapping(vm))?;
            }
            SessionCommand::Drop(target) => {
                if vm.mapping().pending_move().is_none() {
                    writeln!(out, "Nothing picked; use 'pick <guest>' first.")?;
                    continue;
                }
                match target {
                    Some(room) => vm.drop_on_room(&room),
                    None => vm.drop_on_pool(),
                };
                write!(out, "{}", render_mapping(vm))?;
            }
            SessionCommand::Cancel => {
                vm.drag_cancel();
                write!(out, "{}", render_mapping(vm))?;
            }
            SessionCommand::Auto => {
                let summary = vm.auto_assign();
                writeln!(
                    out,
                    "Placed {} guests, {} left unassigned.",
                    summary.placed, summary.remaining
                )?;
                write!(out, "{}", render_mapping(vm))?;
            }
            SessionCommand::Reset => {
                vm.reset();
                write!(out, "{}", render_mapping(vm))?;
            }
            SessionCommand::Show => write!(out, "{}", render_mapping(vm))?,
            SessionCommand::Dismiss => vm.dismiss_notice(),
            SessionCommand::Help => writeln!(out, "{}", HELP)?,
            SessionCommand::Quit => break,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gala_core::{Guest, Room, RoomMapping};
    use std::io::Cursor;

    fn vm() -> RoomMappingViewModel {
        RoomMappingViewModel::new(RoomMapping::new(
            vec![Room::new("r1", "Harbor Inn", "Twin Room", 2)],
            vec![Guest::new("a", "Ada", 1), Guest::new("b", "Bo", 2)],
        ))
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(SessionCommand::parse("   "), Ok(None));
        assert_eq!(
            SessionCommand::parse("assign a r1"),
            Ok(Some(SessionCommand::Assign(GuestId::new("a"), RoomId::new("r1"))))
        );
        assert_eq!(SessionCommand::parse("exit"), Ok(Some(SessionCommand::Quit)));
        assert_eq!(
            SessionCommand::parse("drop"),
            Ok(Some(SessionCommand::Drop(None)))
        );
        assert_eq!(
            SessionCommand::parse("drop r1"),
            Ok(Some(SessionCommand::Drop(Some(RoomId::new("r1")))))
        );
        assert!(SessionCommand::parse("pick").is_err());
        assert!(SessionCommand::parse("assign a").is_err());
        assert!(SessionCommand::parse("dance").is_err());
    }

    #[test]
    fn test_render_mapping() {
        let mut vm = vm();
        vm.move_to_room(&GuestId::new("a"), &RoomId::new("r1"));
        let text = render_mapping(&vm);
        assert!(text.starts_with("Harbor Inn - Twin Room [r1] 1/2\n"));
        assert!(text.contains("Unassigned (1)"));
        assert!(!text.contains('!'));
    }

    #[test]
    fn test_session_flow() {
        let mut vm = vm();
        let input = Cursor::new("assign a r1\nassign b r1\nunassign a\nauto\nquit\nassign a r1\n");
        let mut out = Vec::new();

        run_session(&mut vm, input, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("! Bo cannot be placed in Twin Room: capacity is 2"));
        assert!(text.contains("Placed 1 guests, 1 left unassigned."));

        // Lines after quit are ignored; auto put Bo in r1 after Ada left
        let room = vm.mapping().room(&RoomId::new("r1")).unwrap();
        assert_eq!(room.occupancy(), 2);
        assert_eq!(room.assigned[0].name, "Bo");
    }

    #[test]
    fn test_session_pick_drop_cancel() {
        let mut vm = vm();
        let input = Cursor::new("drop r1\npick a\nshow\ncancel\npick b\ndrop r1\npick b\ndrop\nquit\n");
        let mut out = Vec::new();

        run_session(&mut vm, input, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Nothing picked"));
        assert!(text.contains(" *a          Ada (1)"));
        assert!(vm.mapping().pending_move().is_none());
        // Bo went to r1, then was dropped back in the pool
        assert_eq!(vm.mapping().room(&RoomId::new("r1")).unwrap().occupancy(), 0);
        assert_eq!(vm.pool_rows().len(), 2);
    }

    #[test]
    fn test_render_guest_summary() {
        use gala_core::{GuestCategory, GuestRecord};

        let record = |id: &str, family: Option<&str>| GuestRecord {
            id: id.to_string(),
            name: format!("Guest {}", id),
            age: None,
            category: GuestCategory::Adult,
            phone: None,
            email: None,
            event_id: "evt-1".to_string(),
            family_id: family.map(str::to_string),
            arrival_date: None,
            departure_date: None,
        };

        let mut vm = GuestListViewModel::new();
        vm.apply_fetch::<String>(Ok(vec![
            record("1", Some("fam-a")),
            record("2", Some("fam-a")),
            record("3", None),
        ]));
        assert_eq!(render_guest_summary(&vm), "3 guests in 2 families\n");
    }

    #[test]
    fn test_render_guest_list() {
        let head = GuestRow {
            key: "fam-a".into(),
            name: "Ana".into(),
            age: "34".into(),
            category: "Adult".into(),
            contact: "555-0101".into(),
            stay: String::new(),
            is_detail: false,
            family_size: 2,
            expanded: true,
        };
        let detail = GuestRow {
            name: "Leo".into(),
            age: "6".into(),
            category: "Child".into(),
            contact: String::new(),
            is_detail: true,
            ..head.clone()
        };

        let text = render_guest_list(&[head, detail]);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("Ana [-1]"));
        assert!(lines[0].ends_with("555-0101"));
        assert!(lines[1].starts_with("    Leo"));
        assert!(lines[1].contains("Child"));
    }

    #[test]
    fn test_render_guest_list_empty() {
        assert_eq!(render_guest_list(&[]), "No guests.\n");
    }
}
