//! The fixed sample run: populate the directory, then update, delete and search.

use std::io::Write;

use crate::db::Database;
use crate::error::Result;
use crate::models::{ClientFilter, ClientUpdate};

const CLIENTS: &[(&str, &str, &str, Option<&str>)] = &[
    ("Joe", "Fearless", "joe1986@mail.ru", Some("+79266847233")),
    ("Maria", "Unambiguous", "soup88@mail.com", None),
    ("Ivan", "Nepomniachtchi", "iva@yandex.ru", Some("+79996415026")),
    ("Kurt", "Best", "kurtbestl88@gmail.com", Some("+79266925128")),
    ("Genadiy", "Samoletov", "victor1784@rambler.ru", None),
    ("Anton", "Klyuchikov", "klyuch_anton666@mail.ru", Some("+79267259026")),
    ("Alexander", "Bezshutnikov", "alex2021@gmail.org", Some("89656692502")),
    ("Alexander", "Ivanov", "alex_ivanov@gmail.org", Some("89656502139")),
    ("Alexander", "Chico", "chico@mail.ru", Some("+79996664411")),
];

const EXTRA_PHONES: &[(&str, i32)] = &[
    ("89664432211", 2),
    ("89664432212", 2),
    ("89657672213", 7),
];

/// Run the sample sequence, writing one status block per operation to `out`.
///
/// Expects an empty directory: client ids 1 through 9 are assumed. Rerunning on
/// a populated database stops at the first duplicate email.
pub async fn run_sample_script<W: Write>(db: &mut Database, out: &mut W) -> Result<()> {
    for &(first_name, last_name, email, phone) in CLIENTS {
        let added = db.add_client(first_name, last_name, email, phone).await?;
        writeln!(out, "{added}")?;
    }

    for &(number, client_id) in EXTRA_PHONES {
        let added = db.add_phone(number, client_id).await?;
        writeln!(out, "{added}")?;
    }

    let updates = [
        (6, ClientUpdate::new().first_name("John")),
        (4, ClientUpdate::new().last_name("Cobain")),
        (90, ClientUpdate::new().phone("+72633257871")),
    ];
    for (client_id, update) in &updates {
        let report = db.update_client(*client_id, update).await?;
        writeln!(out, "{report}")?;
    }

    for (client_id, number) in [(2, "89664432211"), (12, "89664546711")] {
        let deletion = db.delete_phone(client_id, number).await?;
        writeln!(out, "{deletion}")?;
    }

    for client_id in [7, 1, 14] {
        let deletion = db.delete_client(client_id).await?;
        writeln!(out, "{deletion}")?;
    }

    let searches = [
        ClientFilter::new().last_name("Nepomniachtchi"),
        ClientFilter::new().first_name("Kurt"),
        ClientFilter::new().email("victor1784@rambler.ru"),
        ClientFilter::new().phone("89656502139"),
        ClientFilter::new().first_name("Alexander"),
        ClientFilter::new().first_name("Stepan"),
    ];
    for filter in &searches {
        let result = db.find_client(filter).await?;
        writeln!(out, "{result}")?;
    }

    Ok(())
}
