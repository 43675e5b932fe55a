//! Fixed-width line fixtures shared by unit tests.

/// Builds a line by writing values at 1-indexed columns over a blank line.
pub struct LineBuilder {
    chars: Vec<char>,
}

impl LineBuilder {
    pub fn new(tag: char) -> Self {
        Self { chars: vec![tag] }
    }

    /// Write `value` starting at column `start`, growing the line as needed.
    pub fn put(mut self, start: usize, value: &str) -> Self {
        let end = start - 1 + value.chars().count();
        if self.chars.len() < end {
            self.chars.resize(end, ' ');
        }
        for (i, c) in value.chars().enumerate() {
            self.chars[start - 1 + i] = c;
        }
        self
    }

    /// Pad with spaces up to `width` columns.
    pub fn width(mut self, width: usize) -> Self {
        if self.chars.len() < width {
            self.chars.resize(width, ' ');
        }
        self
    }

    pub fn build(self) -> String {
        self.chars.into_iter().collect()
    }
}

pub const ESTABLISHMENT: &str = "1234567890";
pub const DOCUMENT: &str = "12345678000199";
pub const ACCOUNT: &str = "00000000000012345678";

pub fn header_line(file_kind: &str) -> String {
    let parts: [&str; 12] = [
        "0",
        ESTABLISHMENT,
        "20241218",
        "20241201",
        "20241231",
        "0000001",
        "CIELO",
        file_kind,
        "N",
        &" ".repeat(20),
        "151",
        &" ".repeat(177),
    ];
    parts.concat()
}

/// Gross 1000.00, fee 25.00 (negative), net 975.00.
pub fn scheduled_receivable_line() -> String {
    LineBuilder::new('D')
        .put(2, ESTABLISHMENT)
        .put(12, DOCUMENT)
        .put(26, DOCUMENT)
        .put(40, DOCUMENT)
        .put(54, "001")
        .put(57, "002")
        .put(60, "9876543210")
        .put(70, "04")
        .put(72, "+")
        .put(73, "0000000100000")
        .put(86, "-")
        .put(87, "0000000002500")
        .put(100, "+")
        .put(101, "0000000097500")
        .put(114, "0001")
        .put(118, "00001")
        .put(123, ACCOUNT)
        .put(143, "9")
        .put(144, "000010")
        .put(150, "02")
        .put(152, "UR20241218000000000001")
        .put(268, "18122024")
        .put(276, "17122024")
        .put(284, "15122024")
        .put(292, ESTABLISHMENT)
        .put(302, "N")
        .put(303, "N")
        .put(304, "S")
        .put(319, "N")
        .width(400)
        .build()
}

/// Installment 1 of 3: total 3000.00, gross 1000.00, net 975.00, commission 25.00.
pub fn transaction_detail_line() -> String {
    transaction_detail_builder().build()
}

pub fn transaction_detail_builder() -> LineBuilder {
    LineBuilder::new('E')
        .put(2, ESTABLISHMENT)
        .put(12, "001")
        .put(15, "002")
        .put(18, "01")
        .put(20, "03")
        .put(22, "123456")
        .put(28, "02")
        .put(30, "UR20241218000000000001")
        .put(130, "0000000000000000000001")
        .put(152, "0001")
        .put(156, "040")
        .put(166, "411111")
        .put(172, "1234")
        .put(176, "654321")
        .put(182, "0000012345")
        .put(192, "10069930690009F1234A")
        .put(212, "PEDIDO-001")
        .put(232, "02500")
        .put(237, "00000")
        .put(242, "02500")
        .put(247, "+")
        .put(248, "0000000300000")
        .put(261, "+")
        .put(262, "0000000100000")
        .put(275, "+")
        .put(276, "0000000097500")
        .put(289, "-")
        .put(290, "0000000002500")
        .put(471, "143025")
        .put(477, "01")
        .put(479, DOCUMENT)
        .put(493, "001")
        .put(496, "123456789012345")
        .put(541, "001")
        .put(544, "TERM0001")
        .put(561, "00003")
        .put(566, "10122024")
        .put(574, "10122024")
        .put(582, "18122024")
        .put(590, "01011001")
        .put(598, "0000001")
        .put(630, "10012025")
        .put(638, "9876543210")
        .put(648, "01")
        .put(650, "N")
        .put(683, "74123456789012345678901")
        .put(707, "05")
        .width(723)
}

/// Gross 500.00, fee 5.00 (negative), net 495.00.
pub fn pix_line() -> String {
    LineBuilder::new('8')
        .put(2, ESTABLISHMENT)
        .put(12, "01")
        .put(14, "241218")
        .put(20, "101530")
        .put(26, "E12345678202412181015000000000000001")
        .put(62, "123456")
        .put(68, "241219")
        .put(74, "+")
        .put(75, "0000000050000")
        .put(88, "-")
        .put(89, "0000000000500")
        .put(102, "+")
        .put(103, "0000000049500")
        .put(116, "0001")
        .put(120, "00001")
        .put(125, ACCOUNT)
        .put(145, "241218")
        .put(151, "00100")
        .put(156, "0050")
        .put(160, "01")
        .put(162, "TERM0001")
        .put(240, "TX00000000000000000000000000000001")
        .width(275)
        .build()
}

/// Term 30 days, rates 3.500 / 3.650, gross 1000.00, net 965.00.
pub fn negotiation_summary_line() -> String {
    LineBuilder::new('A')
        .put(2, "241218")
        .put(8, "241220")
        .put(14, DOCUMENT)
        .put(28, "030")
        .put(31, "03500")
        .put(36, "+")
        .put(37, "0000000100000")
        .put(50, "+")
        .put(51, "0000000096500")
        .put(64, "NEG00000000000000001")
        .put(84, "040")
        .put(87, "03650")
        .width(250)
        .build()
}

/// Gross 500.00, net 482.50, discount 17.50 (negative).
pub fn negotiation_item_line() -> String {
    LineBuilder::new('B')
        .put(2, "241218")
        .put(8, "250115")
        .put(14, DOCUMENT)
        .put(28, "001")
        .put(31, "002")
        .put(34, "+")
        .put(35, "0000000050000")
        .put(48, "+")
        .put(49, "0000000048250")
        .put(62, "03500")
        .put(67, "Banco Exemplo")
        .put(117, ESTABLISHMENT)
        .put(127, "-")
        .put(128, "0000000001750")
        .width(250)
        .build()
}

/// Deposit of 9650.00.
pub fn receiving_account_line() -> String {
    LineBuilder::new('C')
        .put(2, "0001")
        .put(6, "00001")
        .put(11, ACCOUNT)
        .put(31, "+")
        .put(32, "0000000965000")
        .width(250)
        .build()
}

/// Reserve of 1000.00 due 2024-12-25.
pub fn financial_reserve_line() -> String {
    LineBuilder::new('R')
        .put(2, ESTABLISHMENT)
        .put(12, DOCUMENT)
        .put(26, "001")
        .put(29, "9876543210")
        .put(39, "+")
        .put(40, "0000000100000")
        .put(53, "UR20241218000000000002")
        .put(153, "25122024")
        .put(161, ESTABLISHMENT)
        .width(250)
        .build()
}

/// 100 records, 50 of them `E`, net 97500.00, gross 100000.00.
pub fn trailer_line() -> String {
    let zeros = "0".repeat(17);
    let parts: [&str; 12] = [
        "9",
        "00000000100",
        "+",
        "00000000009750000",
        "00000000050",
        "+",
        "00000000010000000",
        "+",
        &zeros,
        "+",
        &zeros,
        &" ".repeat(155),
    ];
    parts.concat()
}

/// Header, one `D`, one `E` and the trailer.
pub fn sample_file() -> String {
    [
        header_line("04"),
        scheduled_receivable_line(),
        transaction_detail_line(),
        trailer_line(),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_builder_places_columns() {
        let line = LineBuilder::new('X').put(3, "ab").put(6, "c").width(8).build();
        assert_eq!(line, "X ab c  ");
    }

    #[test]
    fn test_fixture_widths() {
        assert_eq!(header_line("04").len(), 250);
        assert_eq!(trailer_line().len(), 250);
        assert_eq!(transaction_detail_line().len(), 723);
    }
}
