//! Spoken text for every narration event, in Spanish.
//!
//! Engines only emit [`Line`] and [`MenuLine`] values; this table turns
//! them into words. A `None` means the mode stays quiet for that event.

use crate::game::effect::{Line, MenuLine};
use crate::game::phase::ModeKind;
use crate::synth::{FrequencyClass, SoundId};

const COUNTDOWN: &str = "¡El juego comenzará en 3, 2, 1!";
const NEW_GAME: &str = "Preparándose para nuevo juego. Presiona 1 o Enter para comenzar.";
const PLAY_AGAIN: &str = "Presiona 1 para jugar de nuevo o 0 para volver al menú.";

fn ready(mode: ModeKind) -> String {
    format!(
        "¡Perfecto! Has elegido jugar {}. ¿Estás listo? Presiona 1 o Enter para comenzar a jugar \
         o 0 para volver al menú anterior",
        mode.title()
    )
}

/// Text for `line` in `mode`.
pub fn line(mode: ModeKind, line: &Line) -> Option<String> {
    match mode {
        ModeKind::Rhythm => rhythm(line),
        ModeKind::Precision => precision(line),
        ModeKind::Memory => memory(line),
    }
}

fn rhythm(line: &Line) -> Option<String> {
    let text = match *line {
        Line::Intro => "Has elegido la opción 1. Ritmo auditivo. Sigue el ritmo con tus teclas. \
             Escucha los sonidos que vienen de la izquierda, centro o derecha y presiona las \
             teclas correctas al compás de la música. Si deseas jugar pulsa 1, si deseas volver \
             al menú principal pulsa 0."
            .to_string(),
        Line::Ready => ready(ModeKind::Rhythm),
        Line::Countdown => COUNTDOWN.to_string(),
        Line::Paused => "Para reanudar la partida presione la tecla P o Barra espaciadora. \
             Si desea regresar al menú presione 0."
            .to_string(),
        Line::Resuming => "Reanudando juego en 3, 2, 1".to_string(),
        Line::Combo(combo) => format!("¡Combo de {combo}!"),
        Line::GameOver { score, record: true } => {
            format!("¡Nuevo récord! Has conseguido {score} puntos. {PLAY_AGAIN}")
        }
        Line::GameOver { score, record: false } => {
            format!("Juego terminado. Tu puntuación final es {score} puntos. {PLAY_AGAIN}")
        }
        Line::NewGame => NEW_GAME.to_string(),
        _ => return None,
    };
    Some(text)
}

fn precision(line: &Line) -> Option<String> {
    let text = match *line {
        Line::Intro => "Has elegido la opción 2. Precisión Auditiva. Reacciona al instante. \
             Identifica sonidos agudos o graves y responde rápido según el tipo o secuencia. \
             Recuerda que debe presionar la flecha izquierda si escucha una frecuencia aguda, o \
             debe presionar la flecha derecha si escucha una frecuencia grave. Si desea pausar \
             pulse la tecla P o Barra espaciadora. Presiona 1 para comenzar a jugar o 0 para \
             volver al menú anterior."
            .to_string(),
        Line::Ready => ready(ModeKind::Precision),
        Line::Countdown => COUNTDOWN.to_string(),
        Line::Paused => {
            "Juego pausado. Presiona P o Espacio para continuar, o 0 para volver al menú."
                .to_string()
        }
        Line::Resuming => "Reanudando en 3, 2, 1".to_string(),
        Line::Combo(combo) => format!("¡Combo de {combo}! Excelente precisión!"),
        Line::Reveal(SoundId::Frequency(FrequencyClass::High)) => {
            "Era agudo, flecha izquierda".to_string()
        }
        Line::Reveal(SoundId::Frequency(FrequencyClass::Low)) => {
            "Era grave, flecha derecha".to_string()
        }
        Line::Timeout => "Tiempo agotado".to_string(),
        Line::GameOver { score, record: true } => {
            format!("¡Nuevo récord! {score} puntos. {PLAY_AGAIN}")
        }
        Line::GameOver { score, record: false } => {
            format!("Juego terminado. {score} puntos. {PLAY_AGAIN}")
        }
        Line::NewGame => NEW_GAME.to_string(),
        _ => return None,
    };
    Some(text)
}

fn memory(line: &Line) -> Option<String> {
    let text = match *line {
        Line::Intro => "Has elegido la opción 3. Memoria Auditiva. Escucha, memoriza y repite. \
             Sigue la secuencia de sonidos y repítela en el mismo orden usando las teclas \
             correspondientes. Recuerda que debe presionar la flecha izquierda si escucha un \
             tambor, la flecha de arriba si escucha una trompeta, la flecha de la derecha si \
             escucha una guitarra, y la flecha de abajo si escucha un piano. Si desea pausar \
             pulse la tecla P o Barra espaciadora. Presiona 1 o Enter para comenzar a jugar o 0 \
             para volver al menú anterior."
            .to_string(),
        Line::Countdown => "¡Comenzando Memoria Auditiva! Escucha atentamente la secuencia de \
             instrumentos."
            .to_string(),
        Line::Paused => {
            "Juego pausado. Presiona P o Barra espaciadora para continuar.".to_string()
        }
        Line::Resuming => "Reanudando juego".to_string(),
        Line::Level { level, length } => {
            format!("Nivel {level}. Escucha la secuencia de {length} instrumentos.")
        }
        Line::YourTurn => "Ahora repite la secuencia. Usa las flechas: izquierda para tambor, \
             arriba para trompeta, derecha para guitarra, abajo para piano."
            .to_string(),
        Line::SequenceCorrect { points } => {
            format!("¡Excelente! Secuencia correcta. Has ganado {points} puntos.")
        }
        Line::SequenceWrong => "¡Incorrecto! Inténtalo de nuevo.".to_string(),
        Line::GameOver { score, record: true } => {
            format!("¡Nuevo récord! Has conseguido {score} puntos. {PLAY_AGAIN}")
        }
        Line::GameOver { score, record: false } => {
            format!("Juego terminado. Tu puntuación final es {score} puntos. {PLAY_AGAIN}")
        }
        _ => return None,
    };
    Some(text)
}

/// Text for a main-menu event.
pub fn menu_line(line: &MenuLine) -> String {
    match *line {
        MenuLine::Welcome => "Bienvenido a Katamaran, un juego inclusivo diseñado para personas \
             con discapacidad visual o visión reducida. Por favor, selecciona una opción para \
             continuar: pulsa 1 para escuchar información sobre el juego Ritmo Auditivo, 2 para \
             conocer el modo Precisión Auditiva, 3 para descubrir cómo jugar Memoria Auditiva, 4 \
             para recibir información general sobre Katamaran, o 0 para repetir este menú. \
             También puedes usar la tecla Enter para seleccionar la opción resaltada."
            .to_string(),
        MenuLine::Repeat => "Bienvenido a Katamaran. Selecciona una opción: pulsa 1 para Ritmo \
             Auditivo, 2 para Precisión Auditiva, 3 para Memoria Auditiva, 4 para información \
             general, o 0 para repetir este menú. También puedes usar Enter para seleccionar."
            .to_string(),
        MenuLine::Info => "Katamaran es un juego inclusivo que utiliza únicamente audio para \
             crear una experiencia de juego completa. Cada modo de juego entrena diferentes \
             habilidades auditivas y de reacción. Usa las teclas numéricas para navegar y las \
             flechas o teclas específicas durante el juego."
            .to_string(),
        MenuLine::Describe(mode) => format!(
            "Has elegido la opción {}. {}. {} Si deseas jugar pulsa 1 o Enter, si deseas volver \
             al menú principal pulsa 0.",
            mode.option(),
            mode.title(),
            mode.description()
        ),
        MenuLine::Confirm(mode) => format!(
            "¡Perfecto! Has elegido jugar {}. Comenzando juego...",
            mode.title()
        ),
    }
}
