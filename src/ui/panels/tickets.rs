//! Support tickets panel.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Cell, Paragraph, Row, Table},
};

use crate::domain::{Ticket, TicketStatus};
use crate::state::App;
use crate::theme::{MUTED_COLOR, SUCCESS_COLOR, WARNING_COLOR};
use crate::ui::helpers::create_border_block;

use super::loaded_or_placeholder;

pub fn render(app: &App, frame: &mut Frame, area: Rect, focused: bool) {
    let block = create_border_block("Tickets", focused);
    let Some((tickets, inner)) = loaded_or_placeholder(frame, area, block, &app.data.tickets)
    else {
        return;
    };

    if tickets.is_empty() {
        let empty = Paragraph::new("No tickets").style(Style::default().fg(MUTED_COLOR));
        frame.render_widget(empty, inner);
        return;
    }

    let header = Row::new(["Subject", "Status", "Created"])
        .style(Style::default().fg(MUTED_COLOR).add_modifier(Modifier::BOLD));
    let rows = tickets.iter().map(ticket_row);
    let table = Table::new(
        rows,
        [
            Constraint::Min(10),
            Constraint::Length(9),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .column_spacing(1);

    frame.render_widget(table, inner);
}

fn ticket_row(ticket: &Ticket) -> Row<'static> {
    Row::new([
        Cell::from(ticket.subject.clone()),
        Cell::from(Span::styled(
            ticket.status.clone(),
            Style::default().fg(status_color(ticket.status_kind())),
        )),
        Cell::from(ticket.created_date()),
    ])
}

const fn status_color(status: TicketStatus) -> Color {
    match status {
        TicketStatus::Open => SUCCESS_COLOR,
        TicketStatus::Pending => WARNING_COLOR,
        TicketStatus::Other => MUTED_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Loadable;
    use crate::test_utils::{AppMother, TicketMother};
    use crate::ui::panels::test_support::{buffer_text, draw_panel};

    #[test]
    fn test_status_colors() {
        assert_eq!(status_color(TicketStatus::Open), SUCCESS_COLOR);
        assert_eq!(status_color(TicketStatus::Pending), WARNING_COLOR);
        assert_eq!(status_color(TicketStatus::Other), MUTED_COLOR);
    }

    #[test]
    fn test_renders_ticket_rows() {
        let mut app = AppMother::loaded();
        app.data.tickets = Loadable::Loaded(vec![
            TicketMother::with_status(1, "Cannot connect", "open"),
            TicketMother::with_status(2, "Refund", "closed"),
        ]);
        let buffer = draw_panel(&app, 60, 6, render);
        let text = buffer_text(&buffer);

        assert!(text.contains("Subject"));
        assert!(text.contains("Cannot connect"));
        assert!(text.contains("closed"));

        // Row 2 is the first ticket; find its status cell.
        let x = (0..59u16)
            .find(|&x| buffer[(x, 2)].symbol() == "o" && buffer[(x + 1, 2)].symbol() == "p")
            .unwrap();
        assert_eq!(buffer[(x, 2)].fg, SUCCESS_COLOR);
    }

    #[test]
    fn test_no_tickets() {
        let mut app = AppMother::loaded();
        app.data.tickets = Loadable::Loaded(Vec::new());
        let text = buffer_text(&draw_panel(&app, 40, 5, render));
        assert!(text.contains("No tickets"));
    }
}
