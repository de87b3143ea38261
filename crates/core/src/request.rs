/// Last-request-wins bookkeeping for lookups whose responses may arrive out
/// of order.
///
/// Each lookup takes a ticket from [`RequestSequence::begin`]; when its
/// response arrives it is rendered only if [`RequestSequence::is_current`]
/// still holds for that ticket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSequence {
    latest: u64,
}

/// Handle of one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl RequestSequence {
    pub const fn new() -> Self {
        Self { latest: 0 }
    }

    /// Issue a ticket, superseding every earlier one.
    pub fn begin(&mut self) -> Ticket {
        self.latest = self.latest.wrapping_add(1);
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}
