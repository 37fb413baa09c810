use crate::domain::model::{ExtractionResult, Voter};

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}

/// Render the active result as an aligned review table. The default view
/// keeps rows narrow; `show_all` adds the remaining fields as indented
/// detail lines under each row.
pub fn print(result: &ExtractionResult, show_all: bool) {
    println!(
        "Job {}: {} ({} voters reported, {} records)\n",
        result.job_id,
        result.status,
        result.total_voters,
        result.data.len()
    );

    if result.data.is_empty() {
        println!("  (no records)");
        return;
    }

    let name_width = result
        .data
        .iter()
        .map(|voter| field(&voter.name).chars().count())
        .max()
        .unwrap_or(0)
        .max("Name".len());

    println!(
        "  {:<8} {:<14} {:<name_width$}  {:<20} {}",
        "Serial", "Voter ID", "Name", "Father/Husband", "Born",
    );

    for voter in &result.data {
        println!(
            "  {:<8} {:<14} {:<name_width$}  {:<20} {}",
            field(&voter.serial_no),
            field(&voter.voter_id),
            field(&voter.name),
            field(&voter.father_name),
            field(&voter.date_of_birth),
        );

        if show_all {
            let details: [(&str, &Option<String>); 9] = [
                ("Mother", &voter.mother_name),
                ("Occupation", &voter.occupation),
                ("Address", &voter.address),
                ("District", &voter.district),
                ("Upazila", &voter.upazila),
                ("Union", &voter.r#union),
                ("Ward", &voter.ward_number),
                ("Voter area", &voter.voter_area),
                ("Area code", &voter.voter_area_code),
            ];
            for (label, value) in details {
                if let Some(value) = value {
                    println!("      {:<12} {}", label, value);
                }
            }
        }
    }
}

/// Summary line for the end of a run.
pub fn summary(result: &ExtractionResult) -> String {
    format!(
        "{} voters extracted (job {})",
        result.total_voters, result.job_id
    )
}
