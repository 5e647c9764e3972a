//! Static data behind the uniform-standards page.

/// Belt ranks covered by the manual, in progression order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rank {
    White,
    Blue,
    Purple,
    Brown,
    Black,
}

impl Rank {
    pub const ALL: [Rank; 5] = [
        Rank::White,
        Rank::Blue,
        Rank::Purple,
        Rank::Brown,
        Rank::Black,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Rank::White => "Faixa Branca",
            Rank::Blue => "Faixa Azul",
            Rank::Purple => "Faixa Roxa",
            Rank::Brown => "Faixa Marrom",
            Rank::Black => "Faixa Preta",
        }
    }

    /// Official color, as exposed by the manual's hex copy button.
    pub fn hex(self) -> &'static str {
        match self {
            Rank::White => "#FFFFFF",
            Rank::Blue => "#005CB9",
            Rank::Purple => "#440099",
            Rank::Brown => "#603F26",
            Rank::Black => "#000000",
        }
    }

    /// Dark belts get light lettering on the rendered swatch.
    pub fn dark(self) -> bool {
        self != Rank::White
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Audience {
    Adult,
    Kids,
}

/// One rashguard line of the competition kit.
#[derive(Clone, Copy, Debug)]
pub struct Rashguard {
    pub badge: &'static str,
    pub title: &'static str,
    pub specs: [&'static str; 2],
}

pub fn rashguard(audience: Audience) -> Rashguard {
    match audience {
        Audience::Adult => Rashguard {
            badge: "Competição Adulto",
            title: "Rashguard Ranked Pro",
            specs: ["Assimétrico", "IBJJF Legal"],
        },
        Audience::Kids => Rashguard {
            badge: "Competição Kids",
            title: "Rashguard Young",
            specs: ["Design Adaptado", "Conforto Extra"],
        },
    }
}
