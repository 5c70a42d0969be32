use crate::constants::{CSV_UNSETTLED_SENTINEL, TIMESTAMP_FORMAT};
use crate::error::TallyError;
use crate::models::{Participant, Settlement};

/// Render settlement rows as semicolon-delimited CSV, the one durable
/// artifact format downstream bookkeeping consumes. Amounts carry two
/// decimals; a settlement not yet paid out gets the sentinel in place of a
/// timestamp.
pub fn settlements_to_csv(settlements: &[Settlement]) -> Result<String, TallyError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    writer
        .write_record([
            "id",
            "list_id",
            "debtor",
            "creditor",
            "amount",
            "created_at",
            "settled_at",
        ])
        .map_err(|e| TallyError::ExportError(e.to_string()))?;

    for settlement in settlements {
        let settled_at = match settlement.settled_at {
            Some(ts) => ts.format(TIMESTAMP_FORMAT).to_string(),
            None => CSV_UNSETTLED_SENTINEL.to_string(),
        };
        writer
            .write_record([
                settlement.id.to_string(),
                settlement.list_id.to_string(),
                participant_key(&settlement.debtor),
                participant_key(&settlement.creditor),
                format!("{:.2}", settlement.amount),
                settlement.created_at.format(TIMESTAMP_FORMAT).to_string(),
                settled_at,
            ])
            .map_err(|e| TallyError::ExportError(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| TallyError::ExportError(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| TallyError::ExportError(e.to_string()))
}

fn participant_key(participant: &Participant) -> String {
    match participant {
        Participant::User(id) => format!("user:{id}"),
        Participant::Friend(id) => format!("friend:{id}"),
    }
}
