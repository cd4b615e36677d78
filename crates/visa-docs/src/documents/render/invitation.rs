//! ПОЗИВНО ПИСМО: the employer's invitation letter, printed in Cyrillic.

use super::layout::{bold, field, plain, Block, ClausePair, ClauseText, PageSetup, Sheet, SignatureBlock};
use crate::documents::placeholders::{Placeholder as P, PlaceholderMap};

pub fn invitation_letter(map: &PlaceholderMap) -> Sheet {
    let mut sheet = Sheet::new("ПОЗИВНО ПИСМО", PageSetup::default());
    let director = map.get(P::EmployerDirector);

    sheet
        .push(Block::Caption("Позивар је правно лице".to_string()))
        .push(Block::Title("ПОЗИВНО ПИСМО".to_string()))
        .push(Block::Framed(vec![
            Block::paragraph(vec![bold(map.get(P::EmployerFullReference))]),
            Block::Caption("назив и седиште правног лица".to_string()),
            Block::SideBySide(ClausePair::new(
                ClauseText::default()
                    .text(format!("Матични бр. у регистру: {}", map.get(P::EmployerMb))),
                ClauseText::default().text(director),
            )),
            Block::Caption(
                "матични бр. у регистру и име и презиме особе овлашћене за заступање".to_string(),
            ),
        ]))
        .push(Block::paragraph(vec![bold("Овим позивам:")]))
        .push(Block::Fields(vec![
            field("ИМЕ / NAME", map.get(P::WorkerFirstName)),
            field("ПРЕЗИМЕ / SURNAME", map.get(P::WorkerLastName)),
            field("ДАТУМ РОЂЕЊА / DATE OF BIRTH", map.get(P::DateOfBirth)),
            field("МЕСТО РОЂЕЊА / PLACE OF BIRTH", map.get(P::PlaceOfBirth)),
            field("ДРЖАВЉАНИН / CITIZENSHIP", map.get(P::NationalityEn)),
            field("БРОЈ ПАСОША / PASSPORT NO", map.get(P::PassportNumber)),
            field("ИЗДАТ ОД СТРАНЕ / ISSUED BY", map.get(P::PassportIssuer)),
            field("ДАТУМ ИЗДАВАЊА / DATE OF ISSUE", map.get(P::PassportIssueDate)),
            field("ВАЖИ ДО / DATE OF EXPIRY", map.get(P::PassportExpiryDate)),
            field("ПРЕБИВАЛИШТЕ И БОРАВИШТЕ", map.get(P::WorkerAddress)),
            field("ЗАНИМАЊЕ / PROFESSION", map.get(P::JobTitleSr)),
            field("ВРСТА ВИЗЕ / VISA TYPE", "D (виза за дужи боравак)"),
            field("РАЗЛОГ ПОЗИВАЊА / REASON", "Запошљавање / Employment"),
            field("БРОЈ ПОСЕТА / NO. OF ATTENDANCE", "1"),
            field(
                "У ПЕРИОДУ ОД / IN PERIOD FROM",
                format!(
                    "{}  ДО / TO  {}",
                    map.get(P::ContractStartDate),
                    map.get(P::ContractEndDate)
                ),
            ),
            field("ПРЕТХОДНИ БОРАВЦИ У РС", map.get(P::PreviousStays)),
        ]))
        .push(Block::paragraph(vec![
            plain("Именовани ће боравити на адреси: "),
            bold(map.get(P::AccommodationAddress)),
        ]))
        .push(Block::paragraph(vec![plain(format!(
            "Контакт особа за сва обавештења: {director}, Директор, {}, {}",
            map.get(P::ContactPhone),
            map.get(P::ContactEmail),
        ))]))
        .push(Block::paragraph(vec![plain(
            "Обавезујемо се да ћемо сносити све трошкове боравка именованог у Републици Србији, \
             укључујући и трошкове смештаја и издржавања, као и трошкове боравка и принудног \
             удаљења из Републике Србије, укључујући и трошкове боравка у прихватилишту за \
             странце Министарства унутрашњих послова, уколико се исти не могу наплатити од \
             странца кога позивамо.",
        )]))
        .push(Block::Gap(1.0))
        .push(Block::centered(vec![plain(format!(
            "У {} дана {} год.",
            map.get(P::SigningCity),
            map.get(P::SigningDateSr),
        ))]))
        .push(Block::Caption("(место) (датум)".to_string()))
        .push(Block::Signature(
            SignatureBlock::new("Овлашћено лице / Authorized Person", director)
                .sub_caption("(печат и потпис позивара / stamp and signature)"),
        ));
    sheet
}
