use crate::core::models::amino_acid::AminoAcid;
use crate::core::models::codon::Codon;
use phf::{Map, phf_map};
use thiserror::Error;

pub const STANDARD_TABLE_ID: u8 = 1;

/// NCBI translation tables: id => (name, amino acids of the 64 codons in `TCAG` order).
static NCBI_TABLES: Map<u8, (&'static str, &'static str)> = phf_map! {
    1u8 => ("Standard",
        "FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    2u8 => ("Vertebrate Mitochondrial",
        "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSS**VVVVAAAADDEEGGGG"),
    3u8 => ("Yeast Mitochondrial",
        "FFLLSSSSYY**CCWWTTTTPPPPHHQQRRRRIIMMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    4u8 => ("Mold, Protozoan, and Coelenterate Mitochondrial and Mycoplasma/Spiroplasma",
        "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    5u8 => ("Invertebrate Mitochondrial",
        "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSSSSVVVVAAAADDEEGGGG"),
    6u8 => ("Ciliate, Dasycladacean and Hexamita Nuclear",
        "FFLLSSSSYYQQCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    9u8 => ("Echinoderm and Flatworm Mitochondrial",
        "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNNKSSSSVVVVAAAADDEEGGGG"),
    10u8 => ("Euplotid Nuclear",
        "FFLLSSSSYY**CCCWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    11u8 => ("Bacterial, Archaeal and Plant Plastid",
        "FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    12u8 => ("Alternative Yeast Nuclear",
        "FFLLSSSSYY**CC*WLLLSPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    13u8 => ("Ascidian Mitochondrial",
        "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSSGGVVVVAAAADDEEGGGG"),
    14u8 => ("Alternative Flatworm Mitochondrial",
        "FFLLSSSSYYY*CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNNKSSSSVVVVAAAADDEEGGGG"),
    15u8 => ("Blepharisma Macronuclear",
        "FFLLSSSSYY*QCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    16u8 => ("Chlorophycean Mitochondrial",
        "FFLLSSSSYY*LCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    21u8 => ("Trematode Mitochondrial",
        "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNNKSSSSVVVVAAAADDEEGGGG"),
    22u8 => ("Scenedesmus obliquus Mitochondrial",
        "FFLLSS*SYY*LCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    23u8 => ("Thraustochytrium Mitochondrial",
        "FF*LSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    24u8 => ("Rhabdopleuridae Mitochondrial",
        "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSSKVVVVAAAADDEEGGGG"),
    25u8 => ("Candidate Division SR1 and Gracilibacteria",
        "FFLLSSSSYY**CCGWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    26u8 => ("Pachysolen tannophilus Nuclear",
        "FFLLSSSSYY**CC*WLLLAPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    27u8 => ("Karyorelict Nuclear",
        "FFLLSSSSYYQQCCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    28u8 => ("Condylostoma Nuclear",
        "FFLLSSSSYYQQCCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    29u8 => ("Mesodinium Nuclear",
        "FFLLSSSSYYYYCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    30u8 => ("Peritrich Nuclear",
        "FFLLSSSSYYEECC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    31u8 => ("Blastocrithidia Nuclear",
        "FFLLSSSSYYEECCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    32u8 => ("Balanophoraceae Plastid",
        "FFLLSSSSYY*WCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    33u8 => ("Cephalodiscidae Mitochondrial",
        "FFLLSSSSYYY*CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSSKVVVVAAAADDEEGGGG"),
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Unknown genetic code table id: {0}")]
    UnknownTable(u8),
    #[error("Genetic code table {id} is malformed: {reason}")]
    Malformed { id: u8, reason: String },
}

/// A genetic-code translation table.
///
/// Mirrors the shape translation tables are usually distributed in: a forward
/// table of sense codons and a separate list of stop codons. Together they
/// cover all 64 codons exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneticCodeTable {
    id: u8,
    name: &'static str,
    forward_table: Vec<(Codon, AminoAcid)>,
    stop_codons: Vec<Codon>,
}

impl GeneticCodeTable {
    pub fn by_id(id: u8) -> Result<Self, TableError> {
        let &(name, amino_acids) = NCBI_TABLES.get(&id).ok_or(TableError::UnknownTable(id))?;

        if amino_acids.chars().count() != Codon::COUNT {
            return Err(TableError::Malformed {
                id,
                reason: format!("expected {} entries", Codon::COUNT),
            });
        }

        let mut forward_table = Vec::with_capacity(Codon::COUNT);
        let mut stop_codons = Vec::new();
        for (codon, symbol) in Codon::all().zip(amino_acids.chars()) {
            let amino_acid = AminoAcid::from_char(symbol).map_err(|e| TableError::Malformed {
                id,
                reason: e.to_string(),
            })?;
            if amino_acid.is_stop() {
                stop_codons.push(codon);
            } else {
                forward_table.push((codon, amino_acid));
            }
        }

        Ok(Self {
            id,
            name,
            forward_table,
            stop_codons,
        })
    }

    pub fn standard() -> Result<Self, TableError> {
        Self::by_id(STANDARD_TABLE_ID)
    }

    /// `(id, name)` of every supported table, ascending by id.
    pub fn available() -> Vec<(u8, &'static str)> {
        let mut tables: Vec<(u8, &'static str)> = NCBI_TABLES
            .entries()
            .map(|(id, (name, _))| (*id, *name))
            .collect();
        tables.sort_unstable_by_key(|(id, _)| *id);
        tables
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn forward_table(&self) -> &[(Codon, AminoAcid)] {
        &self.forward_table
    }

    pub fn stop_codons(&self) -> &[Codon] {
        &self.stop_codons
    }
}
