//! Code tables from the acquirer's layout manual.
//!
//! Each table maps a fixed-width code to its Portuguese description. A code
//! missing from a table is not an error; record accessors substitute a
//! per-field placeholder through [`describe`].

/// Placeholder for unmapped file kinds, payment statuses and entry types.
pub const UNKNOWN: &str = "Desconhecido";

/// Placeholder for unmapped brands and payment methods.
pub const UNKNOWN_FEMININE: &str = "Desconhecida";

/// Placeholder for unmapped settlement types.
pub const NOT_IDENTIFIED: &str = "Não identificado";

/// A code table lookup.
pub type Table = fn(&str) -> Option<&'static str>;

/// Look `code` up in `table`, falling back to `default`.
///
/// ```
/// use cielo_edi_core::domains::{brand, describe};
///
/// assert_eq!(describe(brand, "001", "Desconhecida"), "Visa");
/// assert_eq!(describe(brand, "999", "Desconhecida"), "Desconhecida");
/// ```
pub fn describe(table: Table, code: &str, default: &'static str) -> &'static str {
    table(code).unwrap_or(default)
}

/// Extract option chosen by the merchant (header columns 48-49).
pub fn file_kind(code: &str) -> Option<&'static str> {
    Some(match code {
        "03" => "Captura/Previsão",
        "04" => "Liquidação/Pagamento",
        "09" => "Saldo em aberto",
        "15" => "Negociação de Recebíveis Cielo (NRC)",
        "16" => "Pix",
        _ => return None,
    })
}

pub fn brand(code: &str) -> Option<&'static str> {
    Some(match code {
        "001" => "Visa",
        "002" => "Master Card",
        "003" => "Amex",
        "006" => "Sorocred",
        "007" => "Elo",
        "009" => "Diners",
        "011" => "Agiplan",
        "015" => "Banescard",
        "023" => "Cabal",
        "029" => "Credsystem",
        "035" => "Esplanada",
        "040" => "Hipercard",
        "060" => "JCB",
        "064" => "Credz",
        "072" => "Hiper",
        "075" => "Ourocard",
        "888" => "Pix",
        _ => return None,
    })
}

pub fn settlement_type(code: &str) -> Option<&'static str> {
    Some(match code {
        "001" => "Débito",
        "002" => "Crédito",
        "004" => "Voucher",
        "005" => "Pré-pago débito",
        "006" => "Pré-pago crédito",
        _ => return None,
    })
}

pub fn payment_status(code: &str) -> Option<&'static str> {
    Some(match code {
        "00" => "Agendado",
        "02" => "Enviado para o banco",
        "03" => "Rejeitado pelo banco",
        "04" => "Pago",
        "05" => "Antecipado",
        "06" => "Cedido",
        "07" => "Retido",
        _ => return None,
    })
}

pub fn entry_type(code: &str) -> Option<&'static str> {
    Some(match code {
        "01" => "Venda débito",
        "02" => "Venda crédito",
        "03" => "Cancelamento",
        "04" => "Chargeback",
        "05" => "Ajuste a crédito",
        "06" => "Ajuste a débito",
        "07" => "Aluguel de equipamento",
        "08" => "Antecipação",
        "09" => "Cessão de recebíveis",
        "10" => "Gravame",
        "11" => "Reserva financeira",
        "12" => "Tarifa",
        _ => return None,
    })
}

pub fn payment_method(code: &str) -> Option<&'static str> {
    Some(match code {
        "001" => "Agiplan crédito à vista",
        "002" => "Agiplan parcelado loja",
        "004" => "Banescard crédito à vista",
        "005" => "Banescard parcelado loja",
        "010" => "Elo crédito à vista",
        "011" => "Elo parcelado loja",
        "012" => "Elo débito",
        "040" => "Visa crédito à vista",
        "041" => "Visa parcelado loja",
        "042" => "Visa débito",
        "043" => "Visa pré-pago",
        "070" => "Master Card crédito à vista",
        "071" => "Master Card parcelado loja",
        "072" => "Master Card débito",
        "073" => "Master Card pré-pago",
        "080" => "Amex crédito à vista",
        "081" => "Amex parcelado loja",
        "090" => "Hipercard crédito à vista",
        "091" => "Hipercard parcelado loja",
        "100" => "Diners crédito à vista",
        "101" => "Diners parcelado loja",
        "500" => "Pix",
        _ => return None,
    })
}

pub fn adjustment_reason(code: &str) -> Option<&'static str> {
    Some(match code {
        "0001" => "Acerto de correção monetária",
        "0002" => "Acerto de data de pagamento",
        "0003" => "Acerto de taxa de comissão",
        "0004" => "Acerto de valores não recebidos",
        "0005" => "Acerto de valores não enviados",
        "0006" => "Acerto de valores pagos indevidamente",
        "0007" => "Cancelamento de venda",
        "0008" => "Chargeback",
        "0009" => "Débito de aluguel de equipamento",
        "0010" => "Cobrança de tarifa",
        _ => return None,
    })
}

pub fn card_group(code: &str) -> Option<&'static str> {
    Some(match code {
        "00" => "Serviço não atribuído",
        "01" => "Cartão emitido no Brasil",
        "02" => "Cartão emitido no exterior",
        _ => return None,
    })
}

pub fn sales_channel(code: &str) -> Option<&'static str> {
    Some(match code {
        "001" => "POS (Point of Sale)",
        "002" => "PDV/TEF",
        "003" => "E-commerce",
        "004" => "EDI",
        "005" => "ADP/BSP",
        "006" => "Manual",
        "007" => "URA/CVA",
        "008" => "Mobile",
        "009" => "Cielo Tap",
        _ => return None,
    })
}

pub fn card_type(code: &str) -> Option<&'static str> {
    Some(match code {
        "01" => "Visa Classic",
        "02" => "Visa Gold",
        "03" => "Visa Platinum",
        "04" => "Visa Infinite",
        "05" => "Visa Business",
        "06" => "Mastercard Standard",
        "07" => "Mastercard Gold",
        "08" => "Mastercard Platinum",
        "09" => "Mastercard Black",
        "10" => "Mastercard Corporate",
        "11" => "Elo Nanquim",
        "12" => "Elo Grafite",
        _ => return None,
    })
}

pub fn capture_type(code: &str) -> Option<&'static str> {
    Some(match code {
        "01" => "Leitura de tarja",
        "02" => "Digitada",
        "03" => "Venda mobile",
        "05" => "Leitura de chip",
        "06" => "Contactless",
        "07" => "Carteira digital",
        "08" => "Token",
        _ => return None,
    })
}

pub fn pricing_model(code: &str) -> Option<&'static str> {
    Some(match code {
        "00001" => "Agenda",
        "00002" => "Antecipação automática",
        "00003" => "Venda",
        "00004" => "Receba rápido",
        _ => return None,
    })
}
