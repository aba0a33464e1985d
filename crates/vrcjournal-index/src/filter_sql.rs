use chrono::{Local, NaiveDate};
use vrcjournal_types::instance::markers;
use vrcjournal_types::{InstanceType, SearchFilter};

/// Render a `SearchFilter` as a SQL fragment for the given table alias.
///
/// Returns an empty string for an empty filter, otherwise a fragment starting
/// with ` AND `. Only chrono-formatted dates, fixed marker literals and plain
/// integers are interpolated; keyword values always travel as bind parameters
/// elsewhere.
///
/// Time-of-day bounds are asymmetric on purpose: the lower bound is
/// inclusive, the upper bound exclusive, so `untilTime:09:00` keeps 08:59 and
/// drops 09:00 exactly.
pub(crate) fn filter_clause(filter: &SearchFilter, alias: &str) -> String {
    let mut parts: Vec<String> = Vec::new();

    if filter.from_date.is_some() || filter.to_date.is_some() {
        let from = filter
            .from_date
            .unwrap_or(NaiveDate::from_ymd_opt(1970, 1, 1).expect("valid epoch date"));
        let to = filter.to_date.unwrap_or_else(|| Local::now().date_naive());
        parts.push(format!(
            "{alias}.Timestamp BETWEEN '{} 00:00:00' AND '{} 23:59:59'",
            from.format("%Y-%m-%d"),
            to.format("%Y-%m-%d")
        ));
    }

    if let Some(from) = filter.from_time {
        parts.push(format!(
            "strftime('%H:%M', {alias}.Timestamp) >= '{}'",
            from.format("%H:%M")
        ));
    }
    if let Some(to) = filter.to_time {
        parts.push(format!(
            "strftime('%H:%M', {alias}.Timestamp) < '{}'",
            to.format("%H:%M")
        ));
    }

    if let Some(day) = filter.day_of_week {
        parts.push(format!("strftime('%w', {alias}.Timestamp) = '{day}'"));
    }

    if let Some(instance_type) = filter.instance_type {
        parts.push(instance_type_clause(instance_type, alias));
    }

    if parts.is_empty() {
        String::new()
    } else {
        format!(" AND {}", parts.join(" AND "))
    }
}

/// Marker predicates mirroring the classifier table. A row satisfies exactly
/// one of these for any well-formed identifier.
fn instance_type_clause(instance_type: InstanceType, alias: &str) -> String {
    let column = format!("{alias}.WorldID");
    let like = |marker: &str| format!("{column} LIKE '%{marker}%'");
    let not_like = |marker: &str| format!("{column} NOT LIKE '%{marker}%'");

    match instance_type {
        InstanceType::Public => format!(
            "{} AND {} AND {} AND {}",
            not_like(markers::HIDDEN),
            not_like(markers::FRIENDS),
            not_like(markers::PRIVATE),
            not_like(markers::GROUP)
        ),
        InstanceType::FriendPlus => like(markers::HIDDEN),
        InstanceType::Friend => like(markers::FRIENDS),
        InstanceType::InvitePlus => format!(
            "{} AND {}",
            like(markers::PRIVATE),
            like(markers::CAN_REQUEST_INVITE)
        ),
        InstanceType::Invite => format!(
            "{} AND {}",
            like(markers::PRIVATE),
            not_like(markers::CAN_REQUEST_INVITE)
        ),
        InstanceType::Group => format!(
            "{} AND {}",
            like(markers::GROUP),
            like(markers::GROUP_MEMBERS)
        ),
        InstanceType::GroupPlus => format!(
            "{} AND {}",
            like(markers::GROUP),
            like(markers::GROUP_PLUS)
        ),
        InstanceType::GroupPublic => format!(
            "{} AND {}",
            like(markers::GROUP),
            like(markers::GROUP_PUBLIC)
        ),
    }
}
