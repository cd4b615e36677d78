//! IZJAVA O SAGLASNOSTI: the worker consents to the employer filing the D visa.

use super::layout::{bold, plain, Block, ClausePair, ClauseText, PageSetup, Sheet, SignatureBlock};
use crate::documents::placeholders::{Placeholder as P, PlaceholderMap};

pub fn statement_of_consent(map: &PlaceholderMap) -> Sheet {
    let mut sheet = Sheet::new(
        "IZJAVA O SAGLASNOSTI / STATEMENT OF CONSENT",
        PageSetup::default(),
    );

    let employer = map.get(P::EmployerName);
    let serbian = ClauseText::default()
        .para(vec![
            plain("Saglasan sam da moj poslodavac "),
            bold(employer),
            plain(format!(
                " (matični broj {}), sa sedištem na adresi ul. {}, aplicira i podnese u moje ime i \
                 za moj račun zahtev za izdavanje vize D (viza za duži boravak) po osnovu \
                 zapošljavanja.",
                map.get(P::EmployerMb),
                map.get(P::EmployerAddress),
            )),
        ])
        .text(
            "Ova izjava data je iz navedenih razloga, a radi postupanja pred državnim organima \
             Republike Srbije i ne može se koristiti u druge svrhe.",
        );
    let english = ClauseText::default()
        .para(vec![
            plain("I consent to my employer, "),
            bold(employer),
            plain(format!(
                " (Company Registration Number: {}), with its registered office at {}, {}, \
                 applying for and submitting on my behalf and for my account, a request for the \
                 issuance of a D visa (long-stay visa) based on employment.",
                map.get(P::EmployerMb),
                map.get(P::EmployerAddress),
                map.get(P::EmployerCity),
            )),
        ])
        .text(
            "This statement is given for the aforementioned reasons, for the purpose of \
             proceedings before the state authorities of the Republic of Serbia, and may not be \
             used for any other purposes.",
        );

    sheet
        .push(Block::Title(
            "IZJAVA O SAGLASNOSTI / STATEMENT OF CONSENT".to_string(),
        ))
        .push(Block::Clauses(vec![ClausePair::new(serbian, english)]))
        .push(Block::Gap(1.0))
        .push(place_and_date(map))
        .push(Block::Gap(1.5))
        .push(Block::Signature(
            SignatureBlock::new(
                "Davalac saglasnosti / Granter of Consent",
                map.get(P::WorkerFullName),
            )
            .sub_caption(format!(
                "br. pasoša / passport no: {}",
                map.get(P::PassportNumber)
            )),
        ));
    sheet
}

/// "U Nepalu, 15.03.2026. godine" beside "In Nepalese, March 15, 2026".
pub(crate) fn place_and_date(map: &PlaceholderMap) -> Block {
    Block::SideBySide(ClausePair::new(
        ClauseText::default()
            .text(format!("U {},", map.get(P::NationalitySrLocative)))
            .text(format!("{} godine", map.get(P::SigningDateSr))),
        ClauseText::default()
            .text(format!("In {},", map.get(P::NationalityEn)))
            .text(map.get(P::SigningDateEn)),
    ))
}
