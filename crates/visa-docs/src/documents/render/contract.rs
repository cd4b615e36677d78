//! UGOVOR O RADU: bilingual employment contract, one table row per article.

use super::layout::{bold, plain, Block, ClausePair, ClauseText, PageSetup, Sheet, SignatureBlock};
use crate::documents::placeholders::{Placeholder as P, PlaceholderMap};

pub fn employment_contract(map: &PlaceholderMap) -> Sheet {
    let mut sheet = Sheet::new(
        "UGOVOR O RADU / EMPLOYMENT CONTRACT",
        PageSetup {
            font_size: 9,
            margins: (10.0, 10.0, 14.0, 10.0),
            line_spacing: 1.2,
        },
    );

    sheet.push(Block::Title(
        "PREDLOG UGOVORA O RADU / EMPLOYMENT CONTRACT PROPOSAL".to_string(),
    ));
    sheet.push(Block::Clauses(vec![parties(map)]));
    sheet.push(Block::Clauses(vec![
        article_1(map),
        article_2(map),
        article_3(map),
        article_4(map),
        article_5(),
        article_6(map),
        article_7(),
        article_8(),
    ]));
    sheet.push(Block::PageBreak);
    sheet.push(Block::Clauses(vec![article_9(), article_10()]));
    sheet.push(Block::SignaturePair(
        SignatureBlock::new("Za poslodavca / for Employer", map.get(P::EmployerDirector))
            .sub_caption("(potpis / signature)")
            .rule(0.9),
        SignatureBlock::new("Zaposleni / Employee", map.get(P::WorkerFullName))
            .sub_caption("(potpis / signature)")
            .rule(0.9),
    ));
    sheet
}

fn heading(number: u8, serbian: &str, english: &str) -> (ClauseText, ClauseText) {
    (
        ClauseText::headed(format!("Član {number}. {serbian}")),
        ClauseText::headed(format!("Article {number}. {english}")),
    )
}

fn parties(map: &PlaceholderMap) -> ClausePair {
    let serbian = ClauseText::default()
        .text(
            "Na osnovu čl. 30. i 33. Zakona o radu (\"Sl. Glasnik RS\", br. 24/2005, 61/2005, \
             54/2009, 32/2013, 75/2014, 13/2017-OUS, 113/2017 i 95/2018-Autentično tumačenje), \
             ugovarači:",
        )
        .para(vec![
            bold("POSLODAVAC:"),
            plain(format!(
                " {}, sa sedištem u opštini: {}, ul. {}, matični broj: {}, PIB: {}, koga zastupa direktor {}.",
                map.get(P::EmployerName),
                map.get(P::EmployerCity),
                map.get(P::EmployerAddress),
                map.get(P::EmployerMb),
                map.get(P::EmployerPib),
                map.get(P::EmployerDirector),
            )),
        ])
        .para(vec![
            bold("ZAPOSLENI:"),
            plain(format!(
                " {}, državljanin {}, rođen {} godine, broj pasoša {}, izdat od strane {}",
                map.get(P::WorkerFullName),
                map.get(P::NationalitySrGenitive),
                map.get(P::DateOfBirth),
                map.get(P::PassportNumber),
                map.get(P::PassportIssuer),
            )),
        ])
        .text(format!(
            "Zaključuju u {}, dana {} godine sledeći",
            map.get(P::SigningCity),
            map.get(P::SigningDateSr),
        ));

    let english = ClauseText::default()
        .text(
            "Pursuant to article 30 and article 33 of the Employment Act (\"Off. Herald of RS\", \
             Nos. 24/2005, 61/2005, 54/2009, 32/2013, 75/2014, 13/2017-Decision of the CC, \
             113/2017 and 95/2018-authentic interpretation), contracting parties:",
        )
        .para(vec![
            bold("EMPLOYER:"),
            plain(format!(
                " {}, seated in {} municipality, {} street, registration No: {}, Tax identification No: {}, represented by director {}.",
                map.get(P::EmployerName),
                map.get(P::EmployerCity),
                map.get(P::EmployerAddress),
                map.get(P::EmployerMb),
                map.get(P::EmployerPib),
                map.get(P::EmployerDirector),
            )),
        ])
        .para(vec![
            bold("EMPLOYEE:"),
            plain(format!(
                " {}, citizen of {}, born {}, passport no: {}, issued by {}",
                map.get(P::WorkerFullName),
                map.get(P::NationalityEn),
                map.get(P::DateOfBirth),
                map.get(P::PassportNumber),
                map.get(P::PassportIssuer),
            )),
        ])
        .text(format!(
            "Concluded in {}, on {} following",
            map.get(P::SigningCity),
            map.get(P::SigningDateSr),
        ));

    ClausePair::new(serbian, english)
}

fn article_1(map: &PlaceholderMap) -> ClausePair {
    let (serbian, english) = heading(
        1,
        "Uslovi potrebni za radno mesto",
        "Conditions needed for the job position",
    );
    ClausePair::new(
        serbian
            .para(vec![
                plain("1.1. Poslodavac zasniva radni odnos sa zaposlenim na radnom mestu: "),
                bold(map.get(P::JobTitleSr)),
                plain("."),
            ])
            .text("1.2. Zaposleni je lice bez stručne spreme.")
            .text(
                "1.3. U skladu sa opštim aktom Poslodavca za navedeno radno mesto se ne zahteva \
                 posebna stručna sprema. Dodatni uslov: poželjno poznavanje engleskog jezika, \
                 početni nivo.",
            ),
        english
            .para(vec![
                plain("1.1. The employer establishes the employment relationship with the employee for the position: "),
                bold(map.get(P::JobTitleEn)),
                plain("."),
            ])
            .text("1.2. The employee has no professional qualifications.")
            .text(
                "1.3. Pursuant to general act of the Employer, no particular professional \
                 qualifications are required for the above mentioned position. Additional \
                 requirement: Desirable english language competency - beginner level.",
            ),
    )
}

fn article_2(map: &PlaceholderMap) -> ClausePair {
    let (serbian, english) = heading(2, "Naziv i opis poslova", "Name and Description of Jobs");
    let serbian = serbian
        .para(vec![
            plain("2.1. Zaposleni će obavljati poslove na radnom mestu: "),
            bold(map.get(P::JobTitleSr)),
            plain("."),
        ])
        .text("2.2. Opis poslova:");
    let english = english
        .para(vec![
            plain("2.1. The employee shall work on a job position of "),
            bold(map.get(P::JobTitleEn)),
            plain("."),
        ])
        .text("2.2. Job Description for:");

    ClausePair::new(
        bullets(
            serbian,
            map,
            [P::JobDescSr1, P::JobDescSr2, P::JobDescSr3],
        ),
        bullets(
            english,
            map,
            [P::JobDescEn1, P::JobDescEn2, P::JobDescEn3],
        ),
    )
}

/// Description lines that were never filled in are left out entirely.
fn bullets(mut clause: ClauseText, map: &PlaceholderMap, slots: [P; 3]) -> ClauseText {
    for slot in slots {
        if let Some(line) = map.optional(slot) {
            clause = clause.text(format!("   - {line}"));
        }
    }
    clause
}

fn article_3(map: &PlaceholderMap) -> ClausePair {
    let (serbian, english) = heading(3, "Mesto rada", "Place of work");
    ClausePair::new(
        serbian.text(format!(
            "3.1. Zaposleni će obavljati poslove na teritoriji {}, a po potrebi poslodavca na \
             teritoriji cele Srbije.",
            map.get(P::EmployerCity)
        )),
        english.text(format!(
            "3.1. The employee will perform tasks in the territory of the City of {}, and if \
             necessary by the employer, in the territory of the whole of Serbia.",
            map.get(P::EmployerCity)
        )),
    )
}

fn article_4(map: &PlaceholderMap) -> ClausePair {
    let (serbian, english) = heading(
        4,
        "Vreme trajanja ugovora i datum stupanja na rad",
        "Term of the Contract and Date of Commencement of work",
    );
    let start = map.get(P::ContractStartDate);
    let end = map.get(P::ContractEndDate);
    ClausePair::new(
        serbian
            .text(format!(
                "4.1. Zaposleni zasniva radni odnos na određeno vreme, počev od {start} godine do {end} godine."
            ))
            .text(
                "4.2. Zaposleni zasniva radni odnos na određeno vreme zbog ograničenog trajanja \
                 radne dozvole za zapošljavanje.",
            )
            .text(
                "4.3. Zaposleni je dužan da stupi na rad danom dobijanja radne dozvole od strane \
                 nadležnog organa Republike Srbije.",
            )
            .text(
                "4.4. Poslodavac se obavezuje da, najkasnije pre stupanja zaposlenog na rad, podnese \
                 sve propisane prijave na obavezno socijalno osiguranje i da blagovremeno uplaćuje \
                 doprinose u skladu sa zakonom.",
            ),
        english
            .text(format!(
                "4.1. The employee establishes the employment relationship for a definite period of time starting on the {start} up to the {end}."
            ))
            .text(
                "4.2. The employee establishes the employment relationship for a definite period \
                 of time due to time-limited work permit for employment.",
            )
            .text(
                "4.3. The employee is hereby bound to commence his work duties on the day of the \
                 starting date of his work permit issued by competent authority of the Republic \
                 of Serbia.",
            )
            .text(
                "4.4. The employer is obliged to, at the latest prior to the moment of the \
                 employee's commencement of work, file a required application for mandatory \
                 social insurance and pay contributions in conformity with law.",
            ),
    )
}

fn article_5() -> ClausePair {
    let (serbian, english) = heading(5, "Radno vreme", "Working Hours");
    ClausePair::new(
        serbian
            .text(
                "5.1. Zaposleni zasniva radni odnos sa punim radnim vremenom, u trajanju od 8 \
                 časova dnevno i 40 časova nedeljno.",
            )
            .text(
                "5.2. O promeni radnog vremena poslodavac će zaposlenog obavestiti najmanje pet \
                 dana pre promene.",
            )
            .text(
                "5.3. Zaposleni prihvata da u toku rada bude raspoređen u slučaju potrebe procesa \
                 rada i organizacije rada, na svako radno mesto koje odgovara njegovoj stručnoj \
                 spremi.",
            ),
        english
            .text(
                "5.1. The employee establishes the employment relationship with full-time working \
                 hours that is 8 hours per day and 40 hours per week.",
            )
            .text(
                "5.2. The employer is obliged to inform the employee about the changes to the \
                 working hours schedule at least five days in advance.",
            )
            .text(
                "5.3. The employee gives his consent to be assigned to other working duties or \
                 position which are in accordance with his qualification if work processes and \
                 work organization so require.",
            ),
    )
}

fn article_6(map: &PlaceholderMap) -> ClausePair {
    let (serbian, english) = heading(6, "Naknada za rad - Zarada", "Compensation for work - Salary");
    let salary = map.get(P::SalaryRsd);
    ClausePair::new(
        serbian
            .para(vec![
                plain(
                    "6.1. Zaposlenom se utvrđuje zarada za poslove koje obavlja, koja ne može biti \
                     manja od minimalne zarade i to zarada zaposlenog utvrđena je u skladu sa \
                     zakonom u iznosu od RSD ",
                ),
                bold(salary),
                plain(" neto mesečno, uvećano za pripadajuće poreze i doprinose."),
            ])
            .text(
                "6.2. Zaposleni ima pravo na isplatu toplog obroka i pravo na isplatu regresa u \
                 skladu sa odlukom direktora.",
            )
            .text(
                "6.3. Po osnovu radnog učinka, zarada može da se uveća odnosno umanji po oceni \
                 poslodavca. Zarada se isplaćuje u celosti do petog u tekućem mesecu za prethodni \
                 mesec.",
            ),
        english
            .para(vec![
                plain(
                    "6.1. The employee is entitled to a salary determined for performing his work \
                     duties, which can't be less than minimum wage, as follows: The employee's \
                     salary is determined in accordance with law in the amount of RSD ",
                ),
                bold(salary),
                plain(" netto per month, increased by the amount of taxes and contributions thereon."),
            ])
            .text(
                "6.2. The employee is entitled to a refund of expenses for food during work and \
                 for subsidy for the use of annual leave in accordance with director's decisions.",
            )
            .text(
                "6.3. Based on work performance, salary can be raised or reduced by the employer's \
                 evaluation. Salary is to be paid in full amount by the fifth of the current month \
                 for the previous month.",
            ),
    )
}

fn article_7() -> ClausePair {
    let (serbian, english) = heading(7, "Odmori i odsustva", "Vacations and Leaves");
    ClausePair::new(
        serbian
            .text(
                "7.1. Zaposleni ima pravo na godišnji odmor za svaku kalendarsku godinu u trajanju \
                 od najmanje 20 radnih dana.",
            )
            .text(
                "7.2. Zaposleni ima pravo na dvanaestinu godišnjeg odmora za svakih mesec dana \
                 rada u kalendarskoj godini u kojoj je prvi put zasnovao radni odnos ili u kojoj \
                 mu prestaje radni odnos.",
            ),
        english
            .text(
                "7.1. The employee is entitled to annual leave in the duration of no less than 20 \
                 work days for every calendar year.",
            )
            .text(
                "7.2. The employee is entitled to a twelfth of the annual leave for every working \
                 month in a calendar year in which he establishes the employment relationship for \
                 the first time or in which the employment relationship is terminated.",
            ),
    )
}

fn article_8() -> ClausePair {
    let (serbian, english) = heading(8, "Naknada štete", "Tort liability");
    ClausePair::new(
        serbian
            .text(
                "8.1. Poslodavac je dužan da organizuje rad kojim se obezbeđuje bezbednost, te \
                 zaštita života i zdravlja zaposlenog u skladu sa zakonom i drugim propisima. \
                 Zaposleni je dužan da se pridržava propisanih mera bezbednosti i zaštite života \
                 i zdravlja na radu.",
            )
            .text(
                "8.2. Zaposleni izjavljuje da nema zdravstvenih ograničenja koja mogu uticati na \
                 nesmetano obavljanje poslova predviđenih ovim ugovorom.",
            )
            .text(
                "8.3. Poslodavac je dužan da zaposlenom nadoknadi štetu koju ovaj pretrpi u slučaju \
                 povrede na radu ili u vezi sa radom.",
            )
            .text(
                "8.4. Zaposleni je odgovoran za štetu koju je, na radu ili u vezi sa radom, namerno \
                 ili iz krajnje nepažnje prouzrokovao poslodavcu.",
            )
            .text(
                "8.5. Postojanje štete, njenu visinu i odgovornost zaposlenog utvrđuje poslodavac \
                 na predlog neposrednog rukovodioca koji je dužan da sasluša zaposlenog.",
            )
            .text(
                "8.6. Poslodavac može, u opravdanim slučajevima delimično (ili potpuno) osloboditi \
                 zaposlenog od naknade štete koju je prouzrokovao, osim ako je štetu prouzrokovao \
                 namerno. Predlog za oslobađanje od naknade štete može podneti zaposleni.",
            ),
        english
            .text(
                "8.1. The employer is obliged to organize work in such way that it secures safety \
                 and protection of life and health in conformity with the law and other \
                 regulations. Employee is obliged to respect regulations on safety and protection \
                 of life and health at work.",
            )
            .text(
                "8.2. The employee hereby states that they have no health disabilities which may \
                 affect their capability to perform their agreed work duties without difficulties.",
            )
            .text(
                "8.3. The employer is obliged to pay to the employee a compensation of damage \
                 sustained due to an injury sustained at work or related to work.",
            )
            .text(
                "8.4. The Employee is liable for the damage he causes to the employer, at work or \
                 in relation to work, with intent or by gross negligence.",
            )
            .text(
                "8.5. Damage existence, its amount and the employee's liability is determined by \
                 the employer upon receiving the proposal of immediate supervisor, who is obliged \
                 to hear out the employee.",
            )
            .text(
                "8.6. The employer can, due to justifiable reasons, partially (or fully) relieve \
                 the employee of compensation for damage caused, unless the damage was caused \
                 intentionally. The employee can file a proposal for excused from liability for \
                 the damage caused.",
            ),
    )
}

fn article_9() -> ClausePair {
    let (serbian, english) = heading(9, "Otkaz ugovora", "Termination of Employment Contract");
    ClausePair::new(
        serbian
            .text(
                "9.1. Svaka od ugovornih strana može otkazati ovaj ugovor, pod uslovima, u \
                 slučajevima i procedure utvrđenim zakonom, opštim aktom i ugovorom o radu.",
            )
            .text("9.2. Otkazom ugovora o radu u saglasnosti sa zakonom, prestaje radni odnos zaposlenog.")
            .text(
                "9.3. Poslodavac može zaposlenom da otkaže ugovor o radu ako za to postoji \
                 opravdani razlog koji se odnosi na radnu sposobnost zaposlenog i njegovo ponašanje.",
            )
            .text(
                "9.4. Poslodavac može da otkaže ugovor o radu zaposlenom koji svojom krivicom učini \
                 povredu radne obaveze.",
            )
            .text(
                "9.5. Poslodavac može da otkaže ugovor o radu zaposlenom koji ne poštuje radnu \
                 disciplinu.",
            )
            .text(
                "9.6. Zaposlenom može da prestane radni odnos ako zato postoji opravdan razlog koji \
                 se odnosi na potrebe poslodavca i to: ako usled tehnoloških, ekonomskih ili \
                 organizacionih promena prestane potreba za obavljanjem određenog posla ili dođe \
                 do smanjenja obima posla; ako odbije zaključenje aneksa ugovora u smislu člana \
                 171. stav 1. tač. 1-5) ovog Zakona o radu.",
            )
            .text(
                "9.7. Ugovor o radu je moguće raskinuti i sporazumom ugovornih strana, u kom \
                 slučaju sporazumom regulišu međusobna prava i obaveze, u skladu sa zakonom, \
                 opštim aktom i ugovorom o radu.",
            ),
        english
            .text(
                "9.1. Each of the contracting parties can cancel this contract, under conditions, \
                 in cases and following procedures as determined by law, by law and employment \
                 contract.",
            )
            .text(
                "9.2. By cancellation of employment contract in accordance with the law, the \
                 employment relationship is terminated.",
            )
            .text(
                "9.3. The employer may cancel the employment contract for just cause which relates \
                 to employee's work ability and his conduct.",
            )
            .text(
                "9.4. The employer may cancel the employment contract of the employee who on his \
                 own fault commits a breach of a work duty.",
            )
            .text(
                "9.5. The employer may cancel the employment contract of an employee who does not \
                 respect the work discipline.",
            )
            .text(
                "9.6. The employee's employment relationship may be terminated if there is a valid \
                 reason relating to the employer's needs, as follows: 1) If as a result of \
                 technological, economic or organizational changes, the need to perform a \
                 specific job ceases, or there is a decrease in workload; 2) If they refuse to \
                 conclude the annex of the contract in terms of Article 171, paragraph 1, items \
                 1-5) of Employment Act.",
            )
            .text(
                "9.7. Employment contract is cancellable by an agreement between contracting \
                 parties, in which case mutual rights and obligations are regulated by the \
                 agreement in accordance with the law, the by law and employment contract.",
            ),
    )
}

fn article_10() -> ClausePair {
    let (serbian, english) = heading(10, "Završne odredbe", "Final provisions");
    ClausePair::new(
        serbian
            .text(
                "10.1. Zaposleni i poslodavac prihvataju da se na sva prava, obaveze i odgovornosti \
                 koja nisu utvrđena ovim ugovorom, primenjuju odgovarajuće odredbe zakona i opšteg \
                 akta.",
            )
            .text(
                "10.2. U slučaju spora po ovom ugovoru koji se ne može rešiti dogovorom ugovornih \
                 strana, odgovorna je nadležnost Osnovnog suda u Beogradu.",
            )
            .text(
                "10.3. Ugovorne strane saglasno konstatuju da su pročitale i razumele odredbe ovog \
                 ugovora i da prihvataju iste, to potvrđuju svojim potpisima na ovom ugovoru.",
            )
            .text("10.4. U slučaju jezičkih nedoumica, važeća je verzija ugovora na srpskom jeziku.")
            .text(
                "10.5. Ovaj ugovor je sačinjen u 4 primerka, od kojih zaposleni zadržava 1 \
                 primerak, a poslodavac 3 primerka.",
            ),
        english
            .text(
                "10.1. The employee and the employer accept that the relevant provisions of the law \
                 and by law apply to the rights, obligations and responsibilities which were not \
                 specified by the employment contract.",
            )
            .text(
                "10.2. Any dispute between the parties in connection with this contract, unless it \
                 can be resolved internally, shall be resolved by Basic Court in Belgrade.",
            )
            .text(
                "10.3. Contracting parties hereby declare that they have read, understood and \
                 agreed to the terms and conditions set in this contract which they confirm by \
                 their signature.",
            )
            .text("10.4. In the event of any linguistic doubts, the Serbian version of this contract shall prevail.")
            .text(
                "10.5. This contract is made in four identical copies of which the employee keeps \
                 one and the employer keeps three.",
            ),
    )
}
