//! Fixed term and author catalogs presented to the user. Pure data; free-form
//! terms typed by the user are accepted everywhere a catalog term is.

pub const AUSTRIAN_TERMS: &[&str] = &[
    "Acción humana", "Agio", "Apalancamiento", "Armonía de intereses", "Beneficio económico",
    "Banca libre", "Capital humano", "Cálculo económico", "Catallaxy", "Conocimiento disperso",
    "Costos de oportunidad", "Crítica del socialismo", "Destrucción creativa",
    "División del trabajo", "Economía subjetiva", "Eficiencia dinámica", "Empresario",
    "Equilibrio", "Escuela Austríaca", "Intervencionismo", "Función empresarial", "Inflación",
    "Interés", "Ley de los rendimientos decrecientes", "Márgenes de ganancia",
    "Método praxeológico", "Moneda sana", "Preferencia temporal", "Proceso de mercado",
    "Propiedad privada", "Rentabilidad", "Salario", "Subjetivismo", "Teoría del capital",
    "Teoría del ciclo económico", "Utilidad marginal", "Valor subjetivo", "Valor trabajo",
    "Ventaja comparativa", "Voluntarismo",
];

pub const AUSTRIAN_AUTHORS: &[&str] = &[
    "Carl Menger", "Ludwig von Mises", "Friedrich Hayek", "Murray Rothbard", "Israel Kirzner",
    "Eugen von Böhm-Bawerk", "Hans-Hermann Hoppe", "Ludwig Lachmann", "Joseph Schumpeter",
    "Henry Hazlitt", "Friedrich von Wieser", "Richard von Strigl", "Jörg Guido Hülsmann",
    "Jesús Huerta de Soto", "George Reisman", "Walter Block", "Lew Rockwell",
];

pub const SOCIALIST_TERMS: &[&str] = &[
    "Lucha de clases", "Plusvalía", "Alienación", "Materialismo histórico",
    "Dictadura del proletariado", "Modo de producción", "Socialismo científico",
    "Revolución proletaria", "Conciencia de clase", "Imperialismo",
    "Capital constante y variable", "Fetichismo de la mercancía", "Acumulación primitiva",
    "Ejército industrial de reserva", "Superestructura e infraestructura",
    "Socialización de los medios de producción", "Teoría del valor-trabajo",
    "Contradicciones del capitalismo", "Comunismo primitivo", "Internacionalismo proletario",
    "Determinismo económico", "Dialéctica materialista", "Explotación laboral", "Pauperización",
    "Concentración del capital",
];

/// Wider catalog used by the extended-definition and batch flows.
pub const EXTENDED_TERMS: &[&str] = &[
    "Acción Humana", "Ahorro", "Aranceles", "Armonía Económica", "Avería", "Banco Central",
    "Bienes de Capital", "Bienes Intermedios", "Bienes de Consumo", "Bienes Públicos",
    "Capitalismo", "Ciclo Económico", "Competencia", "Competencia Monopolística",
    "Competencia Perfecta", "Conocimiento", "Costo de Oportunidad", "Crecimiento Económico",
    "Crédito", "Cálculo Económico", "Deflación", "Demanda", "División del Trabajo",
    "Doble Coincidencia de Deseos", "Economía de Escala", "Eficiencia", "Elasticidad",
    "Emprendimiento", "Equilibrio Económico", "Especialización", "Esperanza de Vida",
    "Espontaneidad", "Estado de Derecho", "Externalidades", "Factor de Producción",
    "Federalismo", "Fiduciario", "Función Empresarial", "Futuro", "Gasto Público",
    "Heterogénea del Capital", "Humano Acción", "Inflación", "Instituciones", "Interés",
    "Interés Natural", "Intervencionismo", "Inversión", "Libre Mercado",
    "Mecanismo de Precios", "Mercado", "Microeconomía", "Modelo de Competencia", "Moneda",
    "Monopolio", "Oferta", "Orden Espontáneo", "Paradigma", "Pareto", "Plusvalía",
    "Poder Adquisitivo", "Política Económica", "Ponderación", "Precio",
    "Preferencia Temporal", "Preferencia de Tiempo", "Preferencias", "Producción",
    "Productividad", "Productividad Marginal", "Propiedad Privada", "Proteccionismo",
    "Racionalidad", "Reconstrucción", "Recurso Económico", "Redistribución de la Riqueza",
    "Regulación", "Renta", "Riesgo", "Sector Privado", "Sector Público", "Seguridad Jurídica",
    "Servicio", "Sistema Económico", "Soberanía del Consumidor", "Sociedad Abierta",
    "Subsidiaridad", "Subsidio", "Sujeto Económico", "Tasa de Interés",
    "Teoría del Capital", "Teoría del Ciclo Económico", "Trabajo", "Valor", "Valor de Uso",
    "Valor del Cambio", "Ventaja Comparativa", "Ventaja Competitiva", "Verosimilitud",
    "Voluntad Individual",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogs_are_non_empty_and_clean() {
        for list in [AUSTRIAN_TERMS, AUSTRIAN_AUTHORS, SOCIALIST_TERMS, EXTENDED_TERMS] {
            assert!(!list.is_empty());
            assert!(list.iter().all(|t| !t.trim().is_empty()));
        }
    }

    #[test]
    fn no_duplicate_extended_terms() {
        let unique: std::collections::HashSet<&str> = EXTENDED_TERMS.iter().copied().collect();
        assert_eq!(unique.len(), EXTENDED_TERMS.len());
    }
}
