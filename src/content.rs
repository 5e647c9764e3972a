/// One question/answer pair of the FAQ accordion.
#[derive(Clone, Copy, Debug)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub static FAQ: [FaqEntry; 4] = [
    FaqEntry {
        question: "Qual a idade mínima para começar?",
        answer: "Nossa metodologia Kids aceita crianças a partir de 4 anos de idade, com foco em disciplina e coordenação motora.",
    },
    FaqEntry {
        question: "Preciso ter experiência prévia?",
        answer: "Não. Temos turmas específicas para iniciantes onde ensinamos os fundamentos básicos com total segurança.",
    },
    FaqEntry {
        question: "Quais são os horários de treino?",
        answer: "Oferecemos horários flexíveis de manhã, tarde e noite. Consulte a unidade mais próxima em 'Escolas' para a grade detalhada.",
    },
    FaqEntry {
        question: "É obrigatório usar o kimono da equipe?",
        answer: "Sim. Para manter a padronização, disciplina e segurança, o uso do uniforme oficial USGO é obrigatório em todas as aulas.",
    },
];

/// Accordion state: at most one panel open at a time.
#[derive(Debug, Default)]
pub struct FaqState {
    open: Option<usize>,
}

impl FaqState {
    pub fn new() -> Self {
        FaqState { open: None }
    }

    /// Opens the panel, or closes it when it is already the open one.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn open(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}
