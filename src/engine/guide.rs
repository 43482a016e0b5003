use std::sync::LazyLock;

use serde::Serialize;
use strsim::jaro_winkler;

use crate::error::{PlanError, Result};

/// Minimum Jaro-Winkler similarity for a fuzzy guide match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.8;

/// How to perform one exercise safely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExerciseGuide {
    pub name: &'static str,
    pub position: &'static str,
    pub execution: &'static str,
    pub cautions: &'static str,
    pub common_mistakes: &'static str,
    pub breathing: &'static str,
}

pub static EXERCISE_GUIDE: LazyLock<Vec<ExerciseGuide>> = LazyLock::new(|| {
    vec![
        ExerciseGuide {
            name: "Agachamento Livre",
            position: "Pés afastados na largura dos ombros, pontas levemente para fora. Coluna reta e peito aberto.",
            execution: "Flexione os joelhos e projete o quadril para trás, como se fosse sentar em uma cadeira invisível. Desça até onde conseguir manter a postura e suba empurrando o chão.",
            cautions: "Mantenha os calcanhares firmes no chão o tempo todo. Olhe para frente.",
            common_mistakes: "Deixar os joelhos caírem para dentro (valgo) ou curvar as costas.",
            breathing: "Inspire ao descer, expire (solte o ar) ao subir.",
        },
        ExerciseGuide {
            name: "Flexão de Braço (ou Joelhos)",
            position: "Mãos apoiadas no chão afastadas um pouco além dos ombros. Corpo em linha reta (prancha) ou joelhos apoiados no chão para facilitar.",
            execution: "Desça o peito em direção ao chão flexionando os cotovelos. Empurre o chão para retornar à posição inicial.",
            cautions: "Mantenha o abdômen contraído para não deixar o quadril cair.",
            common_mistakes: "Cotovelos muito abertos (formando um T) - mantenha-os a 45 graus (formando uma seta).",
            breathing: "Inspire ao descer, expire ao empurrar.",
        },
        ExerciseGuide {
            name: "Abdominal Supra",
            position: "Deitado de costas, joelhos flexionados e pés apoiados no chão. Mãos nas têmporas ou cruzadas no peito.",
            execution: "Eleve os ombros do chão contraindo o abdômen. O movimento é curto e focado na parte superior.",
            cautions: "Imagine que segura uma maçã entre o queixo e o peito para não forçar o pescoço.",
            common_mistakes: "Puxar a cabeça com as mãos ou tentar subir até sentar (não é necessário).",
            breathing: "Solte todo o ar pela boca ao subir (contração), inspire ao descer.",
        },
        ExerciseGuide {
            name: "Prancha Isométrica",
            position: "Apoie os antebraços no chão, cotovelos alinhados abaixo dos ombros. Estenda as pernas apoiando a ponta dos pés.",
            execution: "Mantenha o corpo estático, em linha reta da cabeça aos calcanhares. Contraia forte glúteos e abdômen.",
            cautions: "Não prenda a respiração. Se sentir dor na lombar, apoie os joelhos.",
            common_mistakes: "Quadril muito alto ou muito baixo (arquear a lombar).",
            breathing: "Respiração fluida, constante e controlada.",
        },
        ExerciseGuide {
            name: "Afundo (Passada)",
            position: "Em pé, pés na largura do quadril. Dê um passo largo para trás com uma das pernas.",
            execution: "Flexione os dois joelhos até formarem ângulos de aprox. 90 graus. O joelho de trás aproxima-se do chão.",
            cautions: "O tronco deve permanecer vertical, não incline para frente.",
            common_mistakes: "O joelho da frente ultrapassar muito a ponta do pé ou o calcanhar da frente sair do chão.",
            breathing: "Inspire ao descer, expire ao subir.",
        },
        ExerciseGuide {
            name: "Burpees (Adaptado)",
            position: "Em pé, pés na largura dos ombros.",
            execution: "Agache e apoie as mãos no chão. Leve os pés para trás (posição de prancha). Traga os pés de volta para perto das mãos. Fique em pé.",
            cautions: "Faça o movimento de forma pausada e controlada, sem impacto.",
            common_mistakes: "Curvar as costas ao apoiar as mãos no chão.",
            breathing: "Mantenha um ritmo respiratório constante.",
        },
    ]
});

/// Guide entry whose name is contained in `exercise_name`.
pub fn guide_for(exercise_name: &str) -> Option<&'static ExerciseGuide> {
    EXERCISE_GUIDE
        .iter()
        .find(|guide| exercise_name.contains(guide.name))
}

/// Resolve free-typed text to a guide entry.
///
/// Tries a case-insensitive containment match first, then the closest name by
/// Jaro-Winkler similarity above [`FUZZY_MATCH_THRESHOLD`].
pub fn find_guide(query: &str) -> Result<&'static ExerciseGuide> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Err(PlanError::UnknownExercise(query.to_string()));
    }

    if let Some(guide) = EXERCISE_GUIDE
        .iter()
        .find(|g| g.name.to_lowercase().contains(&needle))
    {
        return Ok(guide);
    }

    EXERCISE_GUIDE
        .iter()
        .map(|g| (g, jaro_winkler(&g.name.to_lowercase(), &needle)))
        .filter(|(_, score)| *score >= FUZZY_MATCH_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(g, _)| g)
        .ok_or_else(|| PlanError::UnknownExercise(query.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::constants::BASE_PROGRAM;

    #[test]
    fn test_every_program_exercise_has_a_guide() {
        for exercise in BASE_PROGRAM.iter() {
            assert!(guide_for(&exercise.name).is_some(), "{}", exercise.name);
        }
    }

    #[test]
    fn test_find_guide_by_fragment() {
        let guide = find_guide("prancha").unwrap();
        assert_eq!(guide.name, "Prancha Isométrica");
    }

    #[test]
    fn test_find_guide_fuzzy() {
        let guide = find_guide("Agachamento Livrre").unwrap();
        assert_eq!(guide.name, "Agachamento Livre");

        let guide = find_guide("abdominal surpa").unwrap();
        assert_eq!(guide.name, "Abdominal Supra");
    }

    #[test]
    fn test_find_guide_unknown() {
        assert!(matches!(
            find_guide("natação"),
            Err(PlanError::UnknownExercise(_))
        ));
        assert!(find_guide("   ").is_err());
    }
}
