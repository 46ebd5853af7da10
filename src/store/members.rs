use tracing::debug;

use crate::models::Member;

/// Owns every registered member, in registration order. Email is the
/// identity and is compared exactly; registration is the only insertion
/// point and nothing ever removes a member.
#[derive(Debug, Default)]
pub struct MemberRoster {
    members: Vec<Member>,
}

impl MemberRoster {
    /// An empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new member. Returns false and leaves the roster untouched
    /// when the email is already taken; otherwise the member starts with an
    /// empty loan list and zero debt.
    pub fn create(
        &mut self,
        name: &str,
        surname: &str,
        email: &str,
        phone: &str,
        address: &str,
    ) -> bool {
        if self.members.iter().any(|member| member.email == email) {
            debug!(%email, "email already registered");
            return false;
        }

        debug!(%email, "member registered");
        self.members
            .push(Member::new(name, surname, email, phone, address));
        true
    }

    /// Exact, case-sensitive lookup by email.
    pub fn find_by_email(&self, email: &str) -> Option<&Member> {
        self.members.iter().find(|member| member.email == email)
    }

    /// Mutable variant of [`find_by_email`](Self::find_by_email); the shell
    /// uses it to hand the lending engine a member whose loans and debt it
    /// may update.
    pub fn find_by_email_mut(&mut self, email: &str) -> Option<&mut Member> {
        self.members.iter_mut().find(|member| member.email == email)
    }

    /// Every member, in registration order.
    pub fn list(&self) -> &[Member] {
        &self.members
    }
}

#[cfg(test)]
mod tests {
    use super::MemberRoster;

    #[test]
    fn duplicate_email_is_rejected_without_changing_the_roster() {
        let mut roster = MemberRoster::new();
        assert!(roster.create("Jane", "Doe", "jane@example.com", "555-0101", "1 Elm St"));
        assert!(!roster.create("Janet", "Doe", "jane@example.com", "555-0102", "2 Elm St"));
        assert_eq!(roster.list().len(), 1);
        // The first registration wins.
        assert_eq!(roster.list()[0].name, "Jane");
    }

    #[test]
    fn new_members_start_with_no_loans_and_no_debt() {
        let mut roster = MemberRoster::new();
        roster.create("Jane", "Doe", "jane@example.com", "555-0101", "1 Elm St");

        let member = roster.find_by_email("jane@example.com").expect("registered");
        assert!(member.loans.is_empty());
        assert_eq!(member.debt, 0);
    }

    #[test]
    fn email_lookup_is_case_sensitive() {
        let mut roster = MemberRoster::new();
        roster.create("Jane", "Doe", "Jane@Example.com", "555-0101", "1 Elm St");

        assert!(roster.find_by_email("Jane@Example.com").is_some());
        assert!(roster.find_by_email("jane@example.com").is_none());
    }

    #[test]
    fn list_preserves_registration_order() {
        let mut roster = MemberRoster::new();
        roster.create("Jane", "Doe", "jane@example.com", "555-0101", "1 Elm St");
        roster.create("John", "Smith", "john@example.com", "555-0102", "2 Oak Ave");

        let emails: Vec<&str> = roster.list().iter().map(|m| m.email.as_str()).collect();
        assert_eq!(emails, ["jane@example.com", "john@example.com"]);
    }
}
