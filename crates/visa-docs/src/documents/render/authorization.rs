//! OVLAŠĆENJE: the worker authorizes the employer to apply for the visa.

use super::consent::place_and_date;
use super::layout::{bold, plain, Block, ClausePair, ClauseText, PageSetup, Sheet, SignatureBlock};
use crate::documents::placeholders::{Placeholder as P, PlaceholderMap};

pub fn power_of_attorney(map: &PlaceholderMap) -> Sheet {
    let mut sheet = Sheet::new("OVLAŠĆENJE / AUTHORIZATION", PageSetup::default());

    let employer = map.get(P::EmployerName);
    let serbian = ClauseText::default().para(vec![
        plain("Ja, "),
        bold(map.get(P::WorkerFullName)),
        plain(format!(
            ", iz {}, sa pasošem broj {}, i mestom prebivališta {}, dajem ovlašćenje i ovlašćujem \
             kompaniju \"{employer}\", iz Republike Srbije, {}, {}, PIB {}, Matični broj {}, \
             osnovana {} godine, rešenjem iz Agencije za Privredne registre {}, da može u moje \
             ime i za moj račun da aplicira za vizu D, radi mog dolaska u Republiku Srbiju i \
             zasnivanja radnog odnosa sa kompanijom \"{employer}\".",
            map.get(P::NationalitySrGenitive),
            map.get(P::PassportNumber),
            map.get(P::WorkerAddress),
            map.get(P::EmployerCity),
            map.get(P::EmployerAddress),
            map.get(P::EmployerPib),
            map.get(P::EmployerMb),
            map.get(P::EmployerFoundingDate),
            map.get(P::EmployerAprNumber),
        )),
    ]);
    let english = ClauseText::default().para(vec![
        plain("I, "),
        bold(map.get(P::WorkerFullName)),
        plain(format!(
            ", from {}, holder of passport No. {}, residing at {}, hereby authorize the company \
             \"{employer}\", Republic of Serbia, {}, {}, Tax ID: {}, Registration No: {}, founded \
             on {}, by decision of the Serbian Business Registers Agency No. {}, to apply on my \
             behalf and for my account for a D visa, for the purpose of my arrival in the \
             Republic of Serbia and establishment of an employment relationship with the \
             company \"{employer}\".",
            map.get(P::NationalityEn),
            map.get(P::PassportNumber),
            map.get(P::WorkerAddress),
            map.get(P::EmployerCity),
            map.get(P::EmployerAddress),
            map.get(P::EmployerPib),
            map.get(P::EmployerMb),
            map.get(P::EmployerFoundingDate),
            map.get(P::EmployerAprNumber),
        )),
    ]);

    sheet
        .push(Block::Title(
            "OVLAŠĆENJE ZA PODNOŠENJE ZAHTEVA / AUTHORIZATION TO SUBMIT APPLICATION".to_string(),
        ))
        .push(Block::Clauses(vec![ClausePair::new(serbian, english)]))
        .push(Block::Gap(1.0))
        .push(place_and_date(map))
        .push(Block::Gap(1.5))
        .push(Block::Signature(
            SignatureBlock::new(
                "Davalac ovlašćenja / Grantor of Authorization",
                map.get(P::WorkerFullName),
            )
            .sub_caption(format!(
                "br. pasoša / passport no: {}",
                map.get(P::PassportNumber)
            )),
        ));
    sheet
}
