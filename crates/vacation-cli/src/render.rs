//! Plain-text rendering of holidays, blocks, and suggestions.

use std::fmt::Write;

use anyhow::Result;
use vacation_engine::{date_key, FreeBlock, HolidayMap, Opportunity};

pub fn holidays_text(holidays: &HolidayMap) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "Public holidays for {}", holidays.year())?;
    writeln!(out, "---")?;
    for (date, name) in holidays {
        writeln!(out, "  {}  {}  {}", date_key(*date), date.format("%a"), name)?;
    }
    writeln!(out, "---")?;
    write!(out, "Total: {} holiday(s)", holidays.len())?;
    Ok(out)
}

pub fn blocks_text(year: i32, blocks: &[FreeBlock], holidays: &HolidayMap) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "Free blocks for {}", year)?;
    writeln!(out, "---")?;
    for block in blocks {
        let names: Vec<&str> = holidays
            .iter()
            .filter(|(date, _)| block.contains(**date))
            .map(|(_, name)| name.as_str())
            .collect();
        write!(
            out,
            "  {} to {}  {:>2} day(s)",
            date_key(block.start),
            date_key(block.end),
            block.len_days()
        )?;
        if names.is_empty() {
            writeln!(out)?;
        } else {
            writeln!(out, "  {}", names.join(", "))?;
        }
    }
    writeln!(out, "---")?;
    write!(out, "Total: {} block(s)", blocks.len())?;
    Ok(out)
}

pub fn suggestions_text(year: i32, opportunities: &[Opportunity]) -> Result<String> {
    let mut out = String::new();
    if opportunities.is_empty() {
        write!(out, "No high-value opportunities found for {}.", year)?;
        return Ok(out);
    }

    writeln!(out, "Top vacation opportunities for {}", year)?;
    for (rank, op) in opportunities.iter().enumerate() {
        let days: Vec<String> = op
            .vacation_days_to_take
            .iter()
            .map(|d| format!("{} ({})", date_key(*d), d.format("%a")))
            .collect();
        writeln!(out)?;
        writeln!(
            out,
            "#{}  {} continuous days off: {} to {}",
            rank + 1,
            op.total_days_off,
            date_key(op.resulting_start_date),
            date_key(op.resulting_end_date)
        )?;
        writeln!(
            out,
            "    take {} leave day(s), efficiency {:.2}",
            op.cost_vacation_days, op.efficiency_score
        )?;
        write!(out, "    {}", days.join(", "))?;
    }
    Ok(out)
}
